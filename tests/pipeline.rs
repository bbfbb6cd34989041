use std::cell::Cell;
use std::fs;
use std::path::Path;

use aram_nerfs::store::load_results;
use aram_nerfs::{run_with, FetchedPage, PageSource, ScrapeError, ScraperConfig, SENTINEL};
use url::Url;

/// Serves a canned response and counts requests
struct StubSource {
    status: u16,
    body: String,
    calls: Cell<usize>,
}

impl StubSource {
    fn new(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
            calls: Cell::new(0),
        }
    }
}

impl PageSource for StubSource {
    fn fetch(&self, _url: &Url) -> Result<FetchedPage, ScrapeError> {
        self.calls.set(self.calls.get() + 1);
        Ok(FetchedPage {
            status: self.status,
            body: self.body.clone(),
        })
    }
}

fn config_for(dir: &Path) -> ScraperConfig {
    ScraperConfig {
        output_path: dir.join("champions.json"),
        ..ScraperConfig::default()
    }
}

#[test]
fn test_single_champion_page() {
    let html = r#"
    <html>
    <body>
    <table>
        <tr><th>Champion</th><th>Dealt</th><th>Taken</th><th>Other</th></tr>
        <tr class="champion-card">
            <td class="image-container">Ashe
Marksman</td>
            <td class="positive">+10%</td>
            <td class="negative">-5%</td>
            <td class="otherCell">Healing reduced</td>
        </tr>
    </table>
    </body>
    </html>
    "#;

    let dir = tempfile::tempdir().unwrap();
    let config = config_for(dir.path());
    let source = StubSource::new(200, html);

    let report = run_with(&source, &config).unwrap();
    assert_eq!(report.champions, 1);
    assert_eq!(report.output_path, config.output_path);
    assert_eq!(source.calls.get(), 1);

    let written: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&config.output_path).unwrap()).unwrap();
    assert_eq!(
        written,
        serde_json::json!({
            "Ashe": {
                "damage_dealt": "+10%",
                "damage_taken": "-5%",
                "other": "Healing reduced"
            }
        })
    );
}

#[test]
fn test_page_without_rows_writes_empty_document() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(dir.path());
    let source = StubSource::new(200, "<html><body><table></table></body></html>");

    let report = run_with(&source, &config).unwrap();
    assert_eq!(report.champions, 0);
    assert_eq!(fs::read_to_string(&config.output_path).unwrap(), "{}");
}

#[test]
fn test_not_found_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(dir.path());
    let source = StubSource::new(404, "<html><body>Not Found</body></html>");

    let err = run_with(&source, &config).unwrap_err();
    assert!(matches!(err, ScrapeError::Status { status: 404, .. }));

    let message = err.to_string();
    assert!(message.contains("404"));
    assert!(message.contains("https://aramnerfs.com/"));
    assert!(!config.output_path.exists());
}

#[test]
fn test_failed_run_keeps_previous_output() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(dir.path());
    fs::write(&config.output_path, "{}").unwrap();

    let source = StubSource::new(503, "");
    assert!(run_with(&source, &config).is_err());
    assert_eq!(fs::read_to_string(&config.output_path).unwrap(), "{}");
}

#[test]
fn test_bad_selector_fails_before_fetch() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = config_for(dir.path());
    config.extractor.other_cell = "td..otherCell".to_string();
    let source = StubSource::new(200, "");

    let err = run_with(&source, &config).unwrap_err();
    assert!(matches!(err, ScrapeError::Selector { .. }));
    assert_eq!(source.calls.get(), 0);
}

#[test]
fn test_mixed_rows_round_trip() {
    let html = r#"
    <table>
        <tr class="champion-card">
            <td class="image-container"><img src="a.png"> Ahri
                <small>Mage</small></td>
            <td class="none">0%</td>
            <td class="positive">+5%</td>
        </tr>
        <tr class="champion-card"><td>no name cell here</td></tr>
        <tr class="champion-card"></tr>
        <tr class="champion-card">
            <td class="image-container">Bel'Veth</td>
        </tr>
        <tr class="champion-card">
            <td class="image-container">Ahri</td>
            <td class="negative">-5%</td>
            <td class="none">0%</td>
            <td class="otherCell">Shielding −10 %</td>
        </tr>
    </table>
    "#;

    let dir = tempfile::tempdir().unwrap();
    let config = config_for(dir.path());
    let source = StubSource::new(200, html);

    let report = run_with(&source, &config).unwrap();
    assert_eq!(report.champions, 2);

    let loaded = load_results(&config.output_path).unwrap();
    assert_eq!(loaded.names().collect::<Vec<_>>(), vec!["Ahri", "Bel'Veth"]);

    let ahri = loaded.get("Ahri").unwrap();
    assert_eq!(ahri.damage_dealt, "-5%");
    assert_eq!(ahri.damage_taken, "0%");
    assert_eq!(ahri.other, "Shielding −10 %");

    let belveth = loaded.get("Bel'Veth").unwrap();
    assert_eq!(belveth.damage_dealt, SENTINEL);
    assert_eq!(belveth.damage_taken, SENTINEL);
    assert_eq!(belveth.other, SENTINEL);

    // non-ASCII is written literally
    let raw = fs::read_to_string(&config.output_path).unwrap();
    assert!(raw.contains("−10 %"));
}
