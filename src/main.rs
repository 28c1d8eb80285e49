use std::{env, fs::read_to_string, time::Instant};

use aiscript_analyzer::diagnostics::{Analyzer, Diagnostic};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        panic!("Incorrect arguments provided!");
    }

    let file_path: &str = &args[1];
    let source = read_to_string(file_path).expect("Failed to read file!");

    let start = Instant::now();
    let analyzer = Analyzer::new();
    let diagnostics = analyzer.diagnose(&source);
    println!("Analyzed in {:?}", start.elapsed());

    if diagnostics.is_empty() {
        println!("No problems found.");
        return;
    }

    for diagnostic in &diagnostics {
        display_diagnostic(file_path, diagnostic);
    }
}

fn display_diagnostic(file_path: &str, diagnostic: &Diagnostic) {
    println!(
        "{}:{}:{}: [{}] {}",
        file_path,
        diagnostic.range.start.line + 1,
        diagnostic.range.start.character + 1,
        diagnostic.source,
        diagnostic.message
    );
}
