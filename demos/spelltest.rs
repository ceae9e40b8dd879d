use respell::{Corrector, evaluate, read_test_set};
use std::{env, process, time::Instant};

fn run() -> respell::Result<()> {
    let mut args = env::args().skip(1);
    let corpus_path = match args.next() {
        Some(path) => path,
        None => {
            eprintln!("usage: spelltest <corpus> <testset> [<testset> ...]");
            process::exit(2);
        }
    };

    let load_start = Instant::now();
    let corrector = Corrector::from_corpus_file(&corpus_path)?;
    println!(
        "Loaded {} words ({} tokens) from {} in {:?}",
        corrector.model().len(),
        corrector.model().total_tokens(),
        corpus_path,
        load_start.elapsed()
    );

    for testset_path in args {
        let cases = read_test_set(&testset_path)?;
        let report = evaluate(&corrector, &cases);
        println!("{}: {}", testset_path, report);
    }
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("spelltest: {}", e);
        process::exit(1);
    }
}
