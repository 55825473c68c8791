use anyhow::{Context, Result, bail};
use markright_config::Config;
use markright_engine::{
    Document,
    fixtures::{Outcome, load_cases},
    handlers::{extract_object, render_html},
    snapshot::repr,
};
use std::{
    fmt::Write,
    io::Read,
    path::{Path, PathBuf},
};

fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .context("Failed to read stdin")?;
        return Ok(source);
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn load(path: &Path) -> Result<Document> {
    let source = read_input(path)?;
    let doc = markright_engine::parse(&source)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    log::info!("Parsed {} ({} top-level items)", path.display(), doc.children.len());
    Ok(doc)
}

pub fn parse(path: &Path, json: bool) -> Result<String> {
    let doc = load(path)?;
    if json {
        Ok(serde_json::to_string_pretty(&doc)?)
    } else {
        Ok(repr(&doc))
    }
}

pub fn print(path: &Path) -> Result<String> {
    let doc = load(path)?;
    Ok(markright_engine::print(&doc)?)
}

pub fn html(path: &Path) -> Result<String> {
    Ok(render_html(&load(path)?)?)
}

pub fn json(path: &Path) -> Result<String> {
    let object = extract_object(&load(path)?)?;
    Ok(serde_json::to_string_pretty(&object)?)
}

pub fn query(path: &Path, query: &str, all: bool) -> Result<String> {
    let doc = load(path)?;
    let texts: Vec<String> = if all {
        doc.query_all(query).iter().map(|node| node.inner_text()).collect()
    } else {
        doc.query(query).map(|node| node.inner_text()).into_iter().collect()
    };
    if texts.is_empty() {
        bail!("No node matches '{query}'");
    }
    Ok(texts.join("\n"))
}

pub struct TestReport {
    pub output: String,
    pub passed: usize,
    pub failed: usize,
}

impl TestReport {
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

/// Files to run: given files as they are, directories searched recursively
/// for `*.mr`, sorted for a stable order.
fn fixture_files(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = vec![];
    for path in paths {
        if path.is_dir() {
            collect_mr_files(path, &mut files)?;
        } else {
            files.push(path.clone());
        }
    }
    files.sort();
    Ok(files)
}

fn collect_mr_files(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    let entries =
        std::fs::read_dir(dir).with_context(|| format!("Failed to read {}", dir.display()))?;
    for entry in entries {
        let path = entry?.path();
        if path.is_dir() {
            collect_mr_files(&path, files)?;
        } else if path.extension().is_some_and(|ext| ext == "mr") {
            files.push(path);
        }
    }
    Ok(())
}

pub fn test(paths: &[PathBuf], config: &Config) -> Result<TestReport> {
    let paths = match (paths.is_empty(), &config.fixtures_path) {
        (false, _) => paths.to_vec(),
        (true, Some(dir)) => vec![dir.clone()],
        (true, None) => bail!(
            "No fixture paths given and no fixtures_path in {}",
            Config::config_path().display()
        ),
    };

    let mut report = TestReport {
        output: String::new(),
        passed: 0,
        failed: 0,
    };
    for file in fixture_files(&paths)? {
        let source = read_input(&file)?;
        let cases =
            load_cases(&source).with_context(|| format!("Invalid fixture file {}", file.display()))?;
        log::debug!("{}: {} cases", file.display(), cases.len());

        for case in cases {
            let outcome = case.run();
            let status = if outcome.is_pass() { "ok" } else { "FAILED" };
            writeln!(report.output, "{} / {} ... {status}", file.display(), case.name)?;
            match outcome {
                Outcome::Passed => report.passed += 1,
                Outcome::Failed { expected, actual } => {
                    report.failed += 1;
                    writeln!(report.output, "--- expected\n{expected}\n--- actual\n{actual}")?;
                }
                Outcome::Errored(err) => {
                    report.failed += 1;
                    writeln!(report.output, "--- parse error\n{err}")?;
                }
            }
        }
    }
    writeln!(
        report.output,
        "\n{} passed, {} failed",
        report.passed, report.failed
    )?;
    Ok(report)
}

pub fn config(
    mut config: Config,
    fixtures_path: Option<PathBuf>,
    log_level: Option<String>,
) -> Result<String> {
    let config_path = Config::config_path();
    if fixtures_path.is_some() || log_level.is_some() {
        if let Some(level) = &log_level {
            level
                .parse::<log::LevelFilter>()
                .with_context(|| format!("Invalid log level '{level}'"))?;
        }
        config.fixtures_path = fixtures_path.or(config.fixtures_path);
        config.log_level = log_level.unwrap_or(config.log_level);
        config.save_to_path(&config_path)?;
        log::info!("Saved config to {}", config_path.display());
    }
    Ok(format!(
        "# {}\nfixtures_path = {}\nlog_level = {}",
        config_path.display(),
        config
            .fixtures_path
            .as_deref()
            .map_or("(unset)".into(), |p| p.display().to_string()),
        config.log_level
    ))
}
