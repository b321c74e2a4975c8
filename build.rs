use serde::Deserialize;
use std::collections::{BTreeMap, HashSet};
use std::env;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CatalogFile {
    browsers: Vec<String>,
    operating_systems: Vec<String>,
    os_aliases: BTreeMap<String, String>,
    bitmap_icons: Vec<BitmapIcon>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BitmapIcon {
    folder: String,
    icon_name: String,
    extension: String,
}

/// Drop repeated identifiers, keeping the first occurrence. Case-insensitive
/// because the matcher is.
fn dedup(list: &str, names: &[String]) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut out = Vec::with_capacity(names.len());
    for name in names {
        if seen.insert(name.to_ascii_lowercase()) {
            out.push(name.clone());
        } else {
            println!("cargo:warning=duplicate {} icon '{}' ignored", list, name);
        }
    }
    out
}

fn write_slice(out: &mut impl Write, ident: &str, names: &[String]) {
    writeln!(out, "static {}: &[&str] = &[", ident).unwrap();
    for name in names {
        writeln!(out, "    {:?},", name).unwrap();
    }
    writeln!(out, "];").unwrap();
}

fn main() {
    let out_dir = env::var_os("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("catalog.rs");

    println!("cargo:rerun-if-changed=src/catalog.json");

    let json_path = Path::new("src/catalog.json");
    let file = File::open(json_path).expect("Failed to open catalog.json");
    let reader = BufReader::new(file);
    let catalog: CatalogFile =
        serde_json::from_reader(reader).expect("Failed to parse catalog.json");

    let browsers = dedup("browser", &catalog.browsers);
    let operating_systems = dedup("os", &catalog.operating_systems);

    let mut out_file = BufWriter::new(File::create(&dest_path).unwrap());

    write_slice(&mut out_file, "BROWSER_ICONS", &browsers);
    writeln!(out_file).unwrap();
    write_slice(&mut out_file, "OS_ICONS", &operating_systems);
    writeln!(out_file).unwrap();

    // Aliases are looked up by the lowercased normalized name
    writeln!(out_file, "static OS_ALIASES: phf::Map<&'static str, &'static str> = ").unwrap();
    let mut aliases = phf_codegen::Map::new();
    let mut alias_keys: HashSet<String> = HashSet::new();
    for (alias, target) in &catalog.os_aliases {
        let key = alias.to_ascii_lowercase();
        if !key.chars().all(|c| c.is_ascii_alphanumeric()) {
            panic!("OS alias '{}' can never match a normalized name", alias);
        }
        if !operating_systems.iter().any(|os| os == target) {
            panic!("OS alias '{}' points at unknown icon '{}'", alias, target);
        }
        if alias_keys.insert(key.clone()) {
            aliases.entry(key, &format!("{:?}", target));
        }
    }
    writeln!(out_file, "{};", aliases.build()).unwrap();
    writeln!(out_file).unwrap();

    // Keyed by "{folder}/{icon}", everything else is svg
    writeln!(out_file, "static ASSET_EXTENSIONS: phf::Map<&'static str, &'static str> = ").unwrap();
    let mut extensions = phf_codegen::Map::new();
    for bitmap in &catalog.bitmap_icons {
        let known = match bitmap.folder.as_str() {
            "browsers" => &browsers,
            "operating-systems" => &operating_systems,
            other => panic!("Unknown icon folder '{}'", other),
        };
        if !known.iter().any(|name| *name == bitmap.icon_name) {
            panic!(
                "Bitmap icon '{}/{}' is not in the catalog",
                bitmap.folder, bitmap.icon_name
            );
        }
        extensions.entry(
            format!("{}/{}", bitmap.folder, bitmap.icon_name),
            &format!("{:?}", bitmap.extension),
        );
    }
    writeln!(out_file, "{};", extensions.build()).unwrap();
}
