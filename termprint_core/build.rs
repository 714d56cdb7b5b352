use std::{env, fs, fs::File, io::prelude::*, path::Path};

/// Concatenate every YAML file under `rules/<kind>/` in file-name order.
/// File-name order is the evaluation order of the rules.
fn concat_rules(kind: &str, dest: &Path) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    let dir = Path::new("rules").join(kind);
    if !dir.exists() {
        let msg = format!("Rules directory not found: {}", dir.display());
        return Err(std::io::Error::new(std::io::ErrorKind::NotFound, msg).into());
    }

    let mut paths: Vec<_> = fs::read_dir(&dir)?.filter_map(Result::ok).collect();
    paths.sort_by_key(std::fs::DirEntry::path);

    let mut groups = Vec::new();
    let mut all_rules = String::new();
    for entry in &paths {
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("yaml") {
            continue;
        }
        all_rules.push_str(&fs::read_to_string(&path)?);
        all_rules.push('\n');
        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            groups.push(stem.to_string());
        }
    }

    let mut file = File::create(dest)?;
    file.write_all(all_rules.as_bytes())?;
    Ok(groups)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=rules/");

    let out_dir = env::var("OUT_DIR")?;
    let out_dir = Path::new(&out_dir);

    concat_rules("prompts", &out_dir.join("all-prompts.yaml"))?;
    let groups = concat_rules("severities", &out_dir.join("all-severity-rules.yaml"))?;

    let mut groups_file = File::create(out_dir.join("all_severity_groups.rs"))?;
    writeln!(&mut groups_file, r"[")?;
    for group in groups {
        writeln!(&mut groups_file, r#""{group}","#)?;
    }
    writeln!(&mut groups_file, r"]")?;

    Ok(())
}
