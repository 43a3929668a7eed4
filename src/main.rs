use clap::{Parser, Subcommand};
use folio::{
    PdfArtifact, PipelineBuilder, PipelineError, RenderOutcome, ReportPipeline, read_groups_file,
    read_narrative_file,
};
use std::path::{Path, PathBuf};
use tokio::runtime::Builder;

/// Generate PDF reports from Markdown-flavoured text or payment records.
#[derive(Parser, Debug)]
#[command(name = "folio", version, about)]
struct Cli {
    /// JSON settings file; unspecified keys keep their defaults.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Flow a text file over as many pages as it needs.
    Narrative {
        input: PathBuf,
        output: PathBuf,
        /// Footer label printed before the page number.
        #[arg(long)]
        label: Option<String>,
    },
    /// Lay out a JSON array of payment groups on a single page.
    Report { input: PathBuf, output: PathBuf },
}

fn main() -> Result<(), PipelineError> {
    env_logger::init();
    let cli = Cli::parse();

    let mut builder = PipelineBuilder::new();
    if let Some(path) = &cli.config {
        builder = builder.with_config_file(path)?;
    }
    if let Command::Narrative { label: Some(label), .. } = &cli.command {
        builder = builder.with_footer_label(label.clone());
    }
    let pipeline = builder.build()?;

    let rt = Builder::new_multi_thread().enable_all().build()?;
    rt.block_on(run(pipeline, cli.command))
}

async fn run(pipeline: ReportPipeline, command: Command) -> Result<(), PipelineError> {
    match command {
        Command::Narrative { input, output, .. } => {
            println!("Rendering {}...", input.display());
            let text = read_narrative_file(&input)?;
            let artifact = pipeline.render_narrative_async(text).await?;
            write_artifact(&artifact, &output)
        }
        Command::Report { input, output } => {
            println!("Rendering payment report from {}...", input.display());
            let groups = read_groups_file(&input)?;
            match pipeline.render_tabular_async(groups).await? {
                RenderOutcome::Rendered(artifact) => write_artifact(&artifact, &output),
                RenderOutcome::NothingToRender => {
                    println!("No hay pagos en el periodo seleccionado; no se ha generado ningún informe.");
                    Ok(())
                }
            }
        }
    }
}

fn write_artifact(artifact: &PdfArtifact, output: &Path) -> Result<(), PipelineError> {
    artifact.write_to_file(output)?;
    println!(
        "Successfully generated {} ({} pages)",
        output.display(),
        artifact.page_count()
    );
    Ok(())
}
