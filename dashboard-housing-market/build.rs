use std::env;
use std::fs;
use std::path::Path;

/// The three wide CSVs the dashboard embeds, by conventional name.
const SOURCES: &[&str] = &["listing_price.csv", "home_value.csv", "sale_count.csv"];

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    // Copy each fixture into OUT_DIR for include_str!. When a fixture is
    // absent (fresh checkout without data), fall back to a two-region
    // sample so the app still builds and renders something.
    for name in SOURCES {
        let src = Path::new("../fixtures").join(name);
        let dest = Path::new(&out_dir).join(name);
        if src.exists() {
            validate(&src);
            fs::copy(&src, &dest).unwrap();
        } else {
            fs::write(
                &dest,
                "RegionID,SizeRank,RegionName,RegionType,StateName,2024-01-31,2024-02-29\n\
                 394913,1,\"New York, NY\",msa,New York,100,110\n\
                 753899,2,\"Los Angeles, CA\",msa,California,200,190\n",
            )
            .unwrap();
        }
        println!("cargo:rerun-if-changed=../fixtures/{}", name);
    }

    println!("cargo:rerun-if-changed=build.rs");
}

/// Fail the build early if a fixture is not readable CSV; a broken file
/// would otherwise only surface at runtime inside the WASM app.
fn validate(path: &Path) {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .unwrap_or_else(|e| panic!("failed to open {}: {}", path.display(), e));
    for record in rdr.records() {
        record.unwrap_or_else(|e| panic!("bad CSV record in {}: {}", path.display(), e));
    }
}
