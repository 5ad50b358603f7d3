use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use wavyte_layout::{
    Behave, Contain, ContextSettings, ItemId, Justify, LayoutContext, LayoutRect, Margins, Scalar,
};

#[derive(Parser, Debug)]
#[command(name = "wavyte-layout", version)]
struct Cli {
    /// Emit debug logs from the layout engine on stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Lay out a built-in preset tree and print the computed rects.
    Demo(DemoArgs),
    /// List the built-in presets.
    Presets,
}

#[derive(Parser, Debug)]
struct DemoArgs {
    /// Tree to lay out.
    #[arg(long, value_enum, default_value_t = Preset::MasterDetail)]
    preset: Preset,

    /// Root width.
    #[arg(long, default_value_t = 1280)]
    width: Scalar,

    /// Root height.
    #[arg(long, default_value_t = 720)]
    height: Scalar,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Optional context settings JSON.
    #[arg(long)]
    settings: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Preset {
    /// Fixed-width sidebar list next to a filling content view.
    MasterDetail,
    /// Justified toolbar above a filling body.
    Toolbar,
    /// Wrapping grid of fixed-size tiles.
    Gallery,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(serde::Serialize)]
struct RectRow {
    id: u32,
    rect: LayoutRect,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.cmd {
        Command::Demo(args) => cmd_demo(args),
        Command::Presets => {
            for preset in Preset::value_variants() {
                if let Some(value) = preset.to_possible_value() {
                    println!("{}", value.get_name());
                }
            }
            Ok(())
        }
    }
}

fn read_settings(path: &Path) -> anyhow::Result<ContextSettings> {
    let s = std::fs::read_to_string(path)
        .with_context(|| format!("read settings '{}'", path.display()))?;
    let settings = ContextSettings::from_json_str(&s)
        .with_context(|| format!("parse settings '{}'", path.display()))?;
    Ok(settings)
}

fn cmd_demo(args: DemoArgs) -> anyhow::Result<()> {
    if args.width <= 0 || args.height <= 0 {
        anyhow::bail!("root size must be positive, got {}x{}", args.width, args.height);
    }
    let settings = match &args.settings {
        Some(path) => read_settings(path)?,
        None => ContextSettings::default(),
    };

    let mut ctx = LayoutContext::from_settings(&settings);
    let root = ctx.build().size(args.width, args.height).id();
    match args.preset {
        Preset::MasterDetail => build_master_detail(&mut ctx, root),
        Preset::Toolbar => build_toolbar(&mut ctx, root),
        Preset::Gallery => build_gallery(&mut ctx, root),
    }
    ctx.run();

    let rows: Vec<RectRow> = ctx
        .item_ids()
        .map(|id| RectRow {
            id: id.raw(),
            rect: ctx.rect(id),
        })
        .collect();

    match args.format {
        OutputFormat::Json => {
            let out = serde_json::to_string_pretty(&rows).context("serialize rects")?;
            println!("{out}");
        }
        OutputFormat::Table => {
            println!("{:>5} {:>7} {:>7} {:>7} {:>7}", "id", "x", "y", "w", "h");
            for row in &rows {
                let (x, y, w, h) = row.rect.xywh();
                println!("{:>5} {x:>7} {y:>7} {w:>7} {h:>7}", row.id);
            }
        }
    }
    Ok(())
}

fn build_master_detail(ctx: &mut LayoutContext, root: ItemId) {
    ctx.set_contain(root, Contain::row());
    let list = ctx
        .build()
        .size(400, 0)
        .behave(Behave::vfill())
        .contain(Contain::column().with_justify(Justify::Start))
        .insert_into(root);
    let mut prev: Option<ItemId> = None;
    for _ in 0..6 {
        let entry = ctx
            .build()
            .size(0, 32)
            .behave(Behave::hfill())
            .margins(Margins::ltrb(8, 4, 8, 0));
        prev = Some(match prev {
            Some(p) => entry.append_after(p),
            None => entry.insert_into(list),
        });
    }
    ctx.build().behave(Behave::fill()).insert_into(root);
}

fn build_toolbar(ctx: &mut LayoutContext, root: ItemId) {
    ctx.set_contain(root, Contain::column());
    let bar = ctx
        .build()
        .size(0, 48)
        .behave(Behave::hfill())
        .contain(Contain::row().with_justify(Justify::Justify))
        .insert_into(root);
    for _ in 0..4 {
        ctx.build().size(64, 32).insert_into(bar);
    }
    ctx.build().behave(Behave::fill()).insert_into(root);
}

fn build_gallery(ctx: &mut LayoutContext, root: ItemId) {
    ctx.set_contain(root, Contain::row().with_wrap().with_justify(Justify::Start));
    for _ in 0..12 {
        ctx.build()
            .size(200, 150)
            .behave(Behave::top_left())
            .margins(Margins::uniform(8))
            .insert_into(root);
    }
}
