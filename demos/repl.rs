use respell::Corrector;
use std::{
    env,
    io::{self, Write},
    path::Path,
    process,
};

fn main() -> io::Result<()> {
    let corpus_path = env::args().nth(1).unwrap_or_else(|| "big.txt".into());

    if !Path::new(&corpus_path).exists() {
        eprintln!("Corpus file not found: {}", corpus_path);
        process::exit(1);
    }

    let corrector = match Corrector::from_corpus_file(&corpus_path) {
        Ok(corrector) => corrector,
        Err(e) => {
            eprintln!("Failed to build corrector: {}", e);
            process::exit(1);
        }
    };

    println!(
        "respell REPL - corpus: {} ({} words)\ntype text, :q to quit",
        corpus_path,
        corrector.model().len()
    );
    let mut input = String::new();
    loop {
        print!("> ");
        io::stdout().flush()?;
        input.clear();
        if io::stdin().read_line(&mut input)? == 0 {
            break; // EOF
        }
        if input.trim() == ":q" {
            break;
        }

        for word in respell::corpus::tokenize(&input) {
            let corrected = corrector.correct(&word);
            if corrected == word {
                println!("  {}  ok", word);
            } else {
                println!("  {}  ->  {}", word, corrected);
            }
        }
    }
    Ok(())
}
