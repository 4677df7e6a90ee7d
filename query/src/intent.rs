/// A classified query, tagged with the goal and the name(s) needed to resolve it.
///
/// Names are taken from the query verbatim (trimmed, lower-cased); whether they
/// resolve to a real creature or move is decided downstream by the data layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// "who is faster A or B" / "compare speed A vs B"
    CompareSpeed { first: String, second: String },

    /// "weaknesses of NAME"
    Weaknesses { name: String },

    /// "evolution of NAME" / "evo line NAME"
    Evolution { name: String },

    /// "base stats of NAME"
    Stats { name: String },

    /// "what is the type of NAME"
    Types { name: String },

    /// "what does move NAME" / "info on move NAME"
    MoveInfo { name: String },

    /// Fallback: full dex entry for the last word of the query.
    Dex { name: String },
}
