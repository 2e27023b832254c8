// keyvocab-spell: Check spelling of words.
//
// Reports whether each word is spelled properly:
//   C: word    (correct)
//   W: word    (wrong / misspelled)
// followed, for misspelled words and when --suggest is given, by
//   S: suggestion
//
// Usage:
//   keyvocab-spell [-d WORDS_DIR] [-l LANG] [-c OPTIONS] [-s] [WORD...]
//
// Options:
//   -d, --words-dir DIR    Directory with <language>.txt word lists
//   -l, --language LANG    Language tag (default: en)
//   -c, --config FILE      TOML file with vocabulary options
//   -s, --suggest          Also print corrections for misspelled words
//   -h, --help             Print help

use std::io;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if keyvocab_cli::wants_help(&args) {
        println!("keyvocab-spell: Check spelling of words.");
        println!();
        println!("Usage: keyvocab-spell [-d WORDS_DIR] [-l LANG] [-c OPTIONS] [-s] [WORD...]");
        println!();
        println!("If WORD arguments are given, checks each word.");
        println!("Otherwise reads words from stdin (one per line). Prints:");
        println!("  C: word    (correct)");
        println!("  W: word    (misspelled)");
        println!();
        println!("Options:");
        println!("  -d, --words-dir DIR    Directory with <language>.txt word lists");
        println!("                         (default: $KEYVOCAB_WORDS_PATH)");
        println!("  -l, --language LANG    Language tag (default: en)");
        println!("  -c, --config FILE      TOML file with vocabulary options");
        println!("  -s, --suggest          Also print corrections for misspelled words");
        println!("  -h, --help             Print this help");
        return;
    }

    keyvocab_cli::init_logging();

    let show_suggestions = args.iter().any(|a| a == "-s" || a == "--suggest");
    let args: Vec<String> = args
        .into_iter()
        .filter(|a| a != "-s" && a != "--suggest")
        .collect();

    let args = keyvocab_cli::parse_args(&args).unwrap_or_else(|e| keyvocab_cli::fatal(&e));
    let registry = keyvocab_cli::build_registry(&args).unwrap_or_else(|e| keyvocab_cli::fatal(&e));
    let Some(vocabulary) = registry.resolve(&args.language) else {
        keyvocab_cli::fatal(&format!("no vocabulary for language {:?}", args.language));
    };
    let words = keyvocab_cli::input_words(&args)
        .unwrap_or_else(|e| keyvocab_cli::fatal(&format!("error reading stdin: {e}")));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for word in &words {
        let _ = keyvocab_cli::write_spelling(&mut out, &vocabulary, word, show_suggestions);
    }
}
