use std::io::{self, BufRead, Write};

use anyhow::Result;
use rotom_bot::Bot;
use rotom_client::DexClient;

#[tokio::main]
async fn main() -> Result<()> {
    let bot = match std::env::var("ROTOM_API_URL") {
        Ok(base) => Bot::with_client(DexClient::with_base(&base)?),
        Err(_) => Bot::new(),
    };

    println!("rotom is listening. Ask about a creature (ctrl-d to quit).");

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let question = line.trim();
        if question.is_empty() {
            continue;
        }

        println!("{}", bot.answer(question).await);
    }

    println!("Bye!");
    Ok(())
}
