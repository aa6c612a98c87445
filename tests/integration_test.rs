use std::fs;
use std::path::PathBuf;
use std::process::Command;

use worksheet_to_pdf::config::Settings;
use worksheet_to_pdf::layout::{plan, remaining_capacity, Region};
use worksheet_to_pdf::parser::{parse_worksheet, InputFormat};
use worksheet_to_pdf::render::{build_scene, render_preview, PdfRenderer};
use worksheet_to_pdf::{paginate, render_worksheet, Layout, ProblemKind, Worksheet};

fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn load(name: &str) -> Worksheet {
    let path = fixtures_path().join(name);
    let content = fs::read_to_string(&path).expect("Failed to read fixture");
    parse_worksheet(&content, InputFormat::detect(&path, &content))
        .expect("Failed to parse fixture")
}

fn settings_for(worksheet: &Worksheet) -> Settings {
    Settings::default().with_worksheet(&worksheet.settings)
}

#[test]
fn test_parse_json_fixture() {
    let worksheet = load("addition_practice.json");

    assert_eq!(worksheet.settings.title, "Addition Practice");
    assert_eq!(worksheet.settings.layout, Layout::TwoColumn);
    assert!(worksheet.settings.has_footnote());

    // The last record has no left operand and is dropped
    assert_eq!(worksheet.problems.len(), 10);
    assert!(worksheet.problems.iter().all(|p| p.is_valid()));
    assert_eq!(worksheet.problems[9].kind_name(), "word-problem");
}

#[test]
fn test_parse_text_fixture() {
    let worksheet = load("mixed_review.txt");

    assert_eq!(worksheet.settings.title, "Mixed Review");
    assert_eq!(worksheet.settings.layout, Layout::TwoColumn);
    assert_eq!(worksheet.problems.len(), 9);

    let algebra: Vec<&str> = worksheet
        .problems
        .iter()
        .filter_map(|p| match &p.kind {
            ProblemKind::AlgebraEquation { variable, .. } => Some(variable.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(algebra, vec!["n", "y"]);
}

#[test]
fn test_small_worksheet_is_enlarged_on_one_page() {
    let worksheet = load("addition_practice.json");
    let settings = settings_for(&worksheet);

    let pagination = plan(&worksheet.problems, &settings.worksheet, &settings.geometry);
    assert!(pagination.fits_single_page());
    assert!(pagination.font_scale > 1.0);

    // The word problem spans both columns
    let page = &pagination.pages[0];
    assert_eq!(page.placements[9].region, Region::FullWidth);
    for placement in &page.placements {
        assert!(placement.bottom() + pagination.spacing <= pagination.budget + 1e-4);
    }
}

#[test]
fn test_long_drill_splits_evenly() {
    let worksheet = load("times_tables.txt");
    assert_eq!(worksheet.problems.len(), 45);
    let settings = settings_for(&worksheet);

    let pagination = plan(&worksheet.problems, &settings.worksheet, &settings.geometry);
    assert_eq!(pagination.font_scale, 1.0);
    assert_eq!(pagination.problems_per_page(), vec![15, 15, 15]);

    let first_numbers: Vec<usize> = pagination.pages.iter().map(|p| p.first_number).collect();
    assert_eq!(first_numbers, vec![1, 16, 31]);

    // The last page is full: nothing else fits
    let capacity = remaining_capacity(&pagination);
    assert_eq!(capacity.basic_equations, 0);
}

#[test]
fn test_pages_preserve_problem_order() {
    let worksheet = load("times_tables.txt");
    for layout in [Layout::SingleColumn, Layout::TwoColumn, Layout::CompactGrid] {
        let mut settings = settings_for(&worksheet);
        settings.worksheet.layout = layout;

        let pages = paginate(&worksheet.problems, &settings.worksheet, &settings.geometry);
        let flattened: Vec<_> = pages.iter().flat_map(|p| p.problems.iter()).collect();
        let original: Vec<_> = worksheet.problems.iter().collect();
        assert_eq!(flattened, original, "order changed under {}", layout);
    }
}

#[test]
fn test_generate_pdf_from_fixtures() {
    for name in ["addition_practice.json", "mixed_review.txt", "times_tables.txt"] {
        let worksheet = load(name);
        let settings = settings_for(&worksheet);

        let pdf_bytes =
            render_worksheet(&worksheet.problems, &settings).expect("Failed to generate PDF");

        assert!(!pdf_bytes.is_empty());
        assert!(pdf_bytes.starts_with(b"%PDF"), "{} is not a PDF", name);
    }
}

#[test]
fn test_pdf_and_preview_share_the_scene() {
    let worksheet = load("times_tables.txt");
    let settings = settings_for(&worksheet);
    let pagination = plan(&worksheet.problems, &settings.worksheet, &settings.geometry);
    let scene = build_scene(&pagination, &settings);

    let pdf_bytes = PdfRenderer::new(false).render(&scene).expect("Failed to generate PDF");
    assert!(pdf_bytes.starts_with(b"%PDF"));

    let json = render_preview(&scene).expect("Failed to build preview");
    let preview: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(preview["pages"].as_array().unwrap().len(), 3);
    assert_eq!(preview["width"], serde_json::json!(816.0));
}

#[test]
fn test_cli_summary_and_output() {
    let binary = PathBuf::from(env!("CARGO_BIN_EXE_worksheet-to-pdf"));
    let input = fixtures_path().join("times_tables.txt");

    let output = Command::new(&binary)
        .args([input.to_str().unwrap(), "--summary"])
        .output()
        .expect("Failed to run worksheet-to-pdf");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Pages:      3"), "{}", stdout);
    assert!(stdout.contains("Page 3: problems 31-45"), "{}", stdout);

    let output_dir = std::env::temp_dir().join("worksheet-to-pdf-cli-test");
    fs::create_dir_all(&output_dir).expect("Failed to create output directory");
    let pdf_path = output_dir.join("drill.pdf");
    let preview_path = output_dir.join("drill.json");

    let status = Command::new(&binary)
        .args([
            input.to_str().unwrap(),
            "-o",
            pdf_path.to_str().unwrap(),
            "--preview",
            preview_path.to_str().unwrap(),
            "--layout",
            "compact-grid",
            "--title",
            "Drill",
        ])
        .status()
        .expect("Failed to run worksheet-to-pdf");
    assert!(status.success());

    let pdf_bytes = fs::read(&pdf_path).expect("PDF not created");
    assert!(pdf_bytes.starts_with(b"%PDF"));
    let preview = fs::read_to_string(&preview_path).expect("Preview not created");
    assert!(preview.contains("\"title\": \"Drill\""));
}

#[test]
fn test_cli_rejects_malformed_input() {
    let binary = PathBuf::from(env!("CARGO_BIN_EXE_worksheet-to-pdf"));
    let input = std::env::temp_dir().join("worksheet-to-pdf-bad-input.txt");
    fs::write(&input, "5 + 3 = ____\n5 + = ____\n").unwrap();

    let output = Command::new(&binary)
        .args([input.to_str().unwrap(), "--summary"])
        .output()
        .expect("Failed to run worksheet-to-pdf");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("line 2"), "{}", stderr);
}
