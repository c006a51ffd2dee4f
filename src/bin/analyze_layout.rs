//! Analyze a glyph dump and print the layout report as JSON.
//!
//! Input is a JSON array of glyph records, one per positioned character:
//!
//! ```json
//! [{"text": "E", "font_name": "Arial-Bold", "size": 14.0, "x": 72.0, "y": 90.0, "page": 1}]
//! ```
//!
//! Usage: `analyze_layout <glyphs.json>`

use resume_layout::{AnalysisConfig, DocumentAnalyzer, Glyph};

fn main() {
    env_logger::init();

    let path = match std::env::args().nth(1) {
        Some(path) => path,
        None => {
            eprintln!("Usage: analyze_layout <glyphs.json>");
            std::process::exit(2);
        }
    };

    match run(&path) {
        Ok(json) => println!("{}", json),
        Err(err) => {
            eprintln!("error: {}", err);
            std::process::exit(1);
        }
    }
}

fn run(path: &str) -> Result<String, Box<dyn std::error::Error>> {
    let data = std::fs::read_to_string(path)?;
    let glyphs: Vec<Glyph> = serde_json::from_str(&data)?;

    let analyzer = DocumentAnalyzer::new(AnalysisConfig::default());
    let report = analyzer.analyze(&glyphs)?;
    Ok(serde_json::to_string_pretty(&report)?)
}
