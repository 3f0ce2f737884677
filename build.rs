use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    println!("cargo:rerun-if-changed=decks/");

    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("builtin_decks.rs");
    let mut f = fs::File::create(&dest_path).unwrap();

    let deck_dir = Path::new("decks");
    if !deck_dir.exists() {
        writeln!(f, "pub const BUILTIN_DECKS: &[(&str, &str)] = &[];").unwrap();
        return;
    }

    let mut entries: Vec<_> = fs::read_dir(deck_dir)
        .unwrap()
        .map(|res| res.unwrap().path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "md"))
        .collect();

    // Stable order so the generated table doesn't churn between builds
    entries.sort();

    writeln!(f, "pub const BUILTIN_DECKS: &[(&str, &str)] = &[").unwrap();
    for path in entries {
        println!("cargo:rerun-if-changed={}", path.display());
        let name = path.file_stem().unwrap().to_string_lossy().into_owned();
        let absolute = fs::canonicalize(&path).unwrap();
        writeln!(
            f,
            "    ({:?}, include_str!({:?})),",
            name,
            absolute.display().to_string()
        )
        .unwrap();
    }
    writeln!(f, "];").unwrap();
}
