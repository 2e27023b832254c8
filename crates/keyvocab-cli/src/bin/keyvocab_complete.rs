// keyvocab-complete: Complete word prefixes.
//
// For each prefix prints the prefix followed by its completions, best
// first, one per line with two spaces of indent:
//   wor:
//     word
//     work
//
// Usage:
//   keyvocab-complete [-d WORDS_DIR] [-l LANG] [-c OPTIONS] [PREFIX...]
//
// Options:
//   -d, --words-dir DIR    Directory with <language>.txt word lists
//   -l, --language LANG    Language tag (default: en)
//   -c, --config FILE      TOML file with vocabulary options
//   -h, --help             Print help

use std::io;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if keyvocab_cli::wants_help(&args) {
        println!("keyvocab-complete: Complete word prefixes.");
        println!();
        println!("Usage: keyvocab-complete [-d WORDS_DIR] [-l LANG] [-c OPTIONS] [PREFIX...]");
        println!();
        println!("If PREFIX arguments are given, completes each prefix.");
        println!("Otherwise reads prefixes from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  -d, --words-dir DIR    Directory with <language>.txt word lists");
        println!("                         (default: $KEYVOCAB_WORDS_PATH)");
        println!("  -l, --language LANG    Language tag (default: en)");
        println!("  -c, --config FILE      TOML file with vocabulary options");
        println!("  -h, --help             Print this help");
        println!();
        println!("Set RUST_LOG=debug to trace ranking decisions on stderr.");
        return;
    }

    keyvocab_cli::init_logging();

    let args = keyvocab_cli::parse_args(&args).unwrap_or_else(|e| keyvocab_cli::fatal(&e));
    let registry = keyvocab_cli::build_registry(&args).unwrap_or_else(|e| keyvocab_cli::fatal(&e));
    let Some(vocabulary) = registry.resolve(&args.language) else {
        keyvocab_cli::fatal(&format!("no vocabulary for language {:?}", args.language));
    };
    let prefixes = keyvocab_cli::input_words(&args)
        .unwrap_or_else(|e| keyvocab_cli::fatal(&format!("error reading stdin: {e}")));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for prefix in &prefixes {
        let _ = keyvocab_cli::write_completions(&mut out, &vocabulary, prefix);
    }
}
