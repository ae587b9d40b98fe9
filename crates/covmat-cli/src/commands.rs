//! Subcommand implementations

use crate::{CategoriesArgs, RenderArgs, SourceArgs};
use anyhow::{bail, Context, Result};
use covmat_core::{category_domain, on_category_changed};
use covmat_loader::{DataSource, FileSource, InMemorySource};
use covmat_model::{CategoryField, Dataset};
use covmat_render::{renderer_for, ChartConfig, OutputFormat};
use std::path::Path;

pub(crate) async fn render(args: RenderArgs) -> Result<()> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(width) = args.width {
        config = config.with_width(width);
    }
    if let Some(row_height) = args.row_height {
        config = config.with_row_height(row_height);
    }
    config.validate().context("invalid chart options")?;

    let dataset = load_dataset(&args.source).await?;
    let field = args
        .category
        .as_deref()
        .map_or_else(|| config.initial_category(), CategoryField::from_column);
    check_field_has_values(&dataset, &field, &config.category_options);

    let document = render_document(&dataset, &config, field, args.format)?;

    match &args.output {
        Some(path) => {
            tokio::fs::write(path, &document)
                .await
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!("Wrote {} output to {}", args.format, path.display());
        }
        None => print!("{document}"),
    }
    Ok(())
}

pub(crate) async fn categories(args: CategoriesArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let dataset = load_dataset(&args.source).await?;
    print!("{}", categories_report(&dataset, &config.category_options));
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<ChartConfig> {
    match path {
        Some(path) => ChartConfig::load(path)
            .with_context(|| format!("failed to load chart config {}", path.display())),
        None => Ok(ChartConfig::default()),
    }
}

async fn load_dataset(source: &SourceArgs) -> Result<Dataset> {
    let source: Box<dyn DataSource> = match (&source.goals, &source.programs, source.sample) {
        (_, _, true) => Box::new(InMemorySource::sample()),
        (Some(goals), Some(programs), false) => Box::new(FileSource::new(goals, programs)),
        _ => bail!("either --sample or both --goals and --programs are required"),
    };

    source
        .load()
        .await
        .with_context(|| format!("failed to load {}", source.describe()))
}

fn render_document(
    dataset: &Dataset,
    config: &ChartConfig,
    field: CategoryField,
    format: OutputFormat,
) -> Result<String> {
    let state = on_category_changed(dataset, field, &config.layout());
    let renderer = renderer_for(format, config);
    renderer
        .render(&state, dataset)
        .with_context(|| format!("failed to render {} output", renderer.name()))
}

fn categories_report(dataset: &Dataset, options: &[CategoryField]) -> String {
    options
        .iter()
        .map(|field| {
            let values: Vec<String> = category_domain(dataset.programs(), field)
                .iter()
                .map(ToString::to_string)
                .collect();
            format!("{} ({}): {}\n", field.label(), field.column(), values.join(", "))
        })
        .collect()
}

/// Warn when no program has a value for `field`. Returns whether any did.
fn check_field_has_values(
    dataset: &Dataset,
    field: &CategoryField,
    options: &[CategoryField],
) -> bool {
    if dataset.programs().is_empty() || !category_domain(dataset.programs(), field).is_empty() {
        return true;
    }

    let known: Vec<&str> = options.iter().map(CategoryField::column).collect();
    tracing::warn!(
        "No program has a value for column '{}' (configured columns: {})",
        field.column(),
        known.join(", ")
    );
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use covmat_loader::{sample_goals, sample_programs};
    use pretty_assertions::assert_eq;

    fn sample() -> Dataset {
        Dataset::new(sample_goals(), sample_programs()).unwrap()
    }

    #[test]
    fn lists_default_categories() {
        let report = categories_report(&sample(), &CategoryField::defaults());
        assert_eq!(
            report,
            "Rigor (Rigor): High, Low, Medium\n\
             Program Type (Program_Type): Community, District\n"
        );
    }

    #[test]
    fn misspelled_column_has_no_values() {
        let dataset = sample();
        let options = CategoryField::defaults();

        assert!(check_field_has_values(&dataset, &CategoryField::Rigor, &options));
        assert!(!check_field_has_values(&dataset, &CategoryField::from_column("rigor"), &options));

        let empty = Dataset::new(sample_goals(), vec![]).unwrap();
        assert!(check_field_has_values(&empty, &CategoryField::from_column("rigor"), &options));
    }

    #[test]
    fn renders_every_format() {
        let dataset = sample();
        let config = ChartConfig::default();
        for format in OutputFormat::ALL {
            let document =
                render_document(&dataset, &config, CategoryField::Rigor, format).unwrap();
            assert!(!document.is_empty(), "{format} output is empty");
        }
    }

    #[tokio::test]
    async fn sample_source_needs_no_files() {
        let source = SourceArgs {
            goals: None,
            programs: None,
            sample: true,
        };
        let dataset = load_dataset(&source).await.unwrap();
        assert_eq!(dataset.goals().len(), 10);
    }

    #[tokio::test]
    async fn missing_tables_report_the_path() {
        let source = SourceArgs {
            goals: Some("/nonexistent/goals.json".into()),
            programs: Some("/nonexistent/programs.json".into()),
            sample: false,
        };
        let err = load_dataset(&source).await.unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/goals.json"));
    }
}
