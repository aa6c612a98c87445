use anyhow::{Context, Result};
use clap::Parser;
use std::fs;

use worksheet_to_pdf::cli::Args;
use worksheet_to_pdf::config::Settings;
use worksheet_to_pdf::layout::{plan, remaining_capacity, Pagination};
use worksheet_to_pdf::parser::{parse_worksheet, InputFormat};
use worksheet_to_pdf::render::{build_scene, render_preview, PdfRenderer};

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    env_logger::Builder::new()
        .filter_level(match args.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        })
        .init();

    // Read input file
    let content = fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read input file: {}", args.input.display()))?;

    let format = InputFormat::detect(&args.input, &content);
    let worksheet = parse_worksheet(&content, format)
        .with_context(|| format!("Failed to parse worksheet: {}", args.input.display()))?;

    log::info!("Loaded {} problems", worksheet.problems.len());

    // Build settings from CLI args and the worksheet's own settings
    let settings = Settings::from_args(&args).with_worksheet(&worksheet.settings);

    log::debug!("Effective layout: {}", settings.layout());

    let pagination = plan(&worksheet.problems, &settings.worksheet, &settings.geometry);
    log::info!(
        "{} layout: {} pages at font scale {}",
        pagination.layout,
        pagination.page_count(),
        pagination.font_scale
    );

    if args.summary {
        print_summary(&pagination);
        return Ok(());
    }

    let scene = build_scene(&pagination, &settings);

    if let Some(ref preview_path) = args.preview {
        let json = render_preview(&scene).with_context(|| "Failed to build preview")?;
        fs::write(preview_path, json).with_context(|| {
            format!("Failed to write preview file: {}", preview_path.display())
        })?;
        log::info!("Wrote preview to {}", preview_path.display());
    }

    let output_path = args.output_path();
    let pdf_data = PdfRenderer::new(settings.compress)
        .render(&scene)
        .with_context(|| "Failed to generate PDF")?;

    fs::write(&output_path, pdf_data)
        .with_context(|| format!("Failed to write output file: {}", output_path.display()))?;

    log::info!("Wrote PDF to {}", output_path.display());

    Ok(())
}

fn print_summary(pagination: &Pagination) {
    println!("Layout:     {}", pagination.layout);
    println!("Font scale: {}", pagination.font_scale);
    println!("Pages:      {}", pagination.page_count());
    for (i, page) in pagination.pages.iter().enumerate() {
        let last = page.first_number + page.len().saturating_sub(1);
        let note = if page.oversized { " (overflows)" } else { "" };
        if page.is_empty() {
            println!("  Page {}: no problems", i + 1);
        } else {
            println!(
                "  Page {}: problems {}-{}{}",
                i + 1,
                page.first_number,
                last,
                note
            );
        }
    }

    let capacity = remaining_capacity(pagination);
    println!(
        "Room left on last page: {:.2} in ({} basic equations, {} multiple choice)",
        capacity.remaining, capacity.basic_equations, capacity.multiple_choice
    );
}
