use anyhow::Result;
use rotom_bot::Bot;

/// One-shot question from the command line:
/// `cargo run --example ask -- weaknesses of garchomp`
#[tokio::main]
async fn main() -> Result<()> {
    let question: Vec<String> = std::env::args().skip(1).collect();
    if question.is_empty() {
        eprintln!("usage: ask <question about a creature>");
        std::process::exit(2);
    }

    let bot = Bot::new();
    println!("{}", bot.answer(&question.join(" ")).await);
    Ok(())
}
