use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use kisekae::{
    AppearanceConfig, AttributeKind, FsImageLoader, PixelImage, Resolution, Settings, Sex,
    Wardrobe,
};

#[derive(Parser, Debug)]
#[command(name = "kisekae", version)]
struct Cli {
    /// Settings JSON (asset names, overrides directory).
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    /// Overrides directory; takes precedence over the settings file.
    #[arg(long, global = true)]
    overrides: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compose a base texture and write it as PNG.
    Compose(ComposeArgs),
    /// Resolve an asset key the way a host asset pipeline would.
    Resolve(ResolveArgs),
    /// Print the number of choices of every attribute.
    Counts,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SexArg {
    Male,
    Female,
}

impl From<SexArg> for Sex {
    fn from(s: SexArg) -> Self {
        match s {
            SexArg::Male => Sex::Male,
            SexArg::Female => Sex::Female,
        }
    }
}

#[derive(Parser, Debug)]
struct ComposeArgs {
    /// Base texture variant.
    #[arg(long, value_enum)]
    sex: SexArg,

    /// Face variant.
    #[arg(long, default_value_t = 0)]
    face: u32,

    /// Nose variant.
    #[arg(long, default_value_t = 0)]
    nose: u32,

    /// Bottoms sprite index.
    #[arg(long, default_value_t = 0)]
    bottoms: u32,

    /// Shoes variant.
    #[arg(long, default_value_t = 0)]
    shoes: u32,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct ResolveArgs {
    /// Asset key, e.g. `KisekaeBase_male_1_2_3_0`.
    #[arg(long)]
    key: String,

    /// Output PNG path for keys that resolve to pixels.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let wardrobe = open_wardrobe(cli.settings.as_deref(), cli.overrides)?;
    match cli.cmd {
        Command::Compose(args) => cmd_compose(&wardrobe, args),
        Command::Resolve(args) => cmd_resolve(&wardrobe, args),
        Command::Counts => cmd_counts(&wardrobe),
    }
}

fn open_wardrobe(
    settings_path: Option<&Path>,
    overrides: Option<PathBuf>,
) -> anyhow::Result<Wardrobe<FsImageLoader>> {
    let mut settings = match settings_path {
        Some(p) => Settings::from_path(p)?,
        None => Settings::default(),
    };
    if let Some(dir) = overrides {
        settings.overrides_dir = dir;
    }
    let loader = FsImageLoader::new(&settings.overrides_dir);
    Ok(Wardrobe::new(loader, settings))
}

fn cmd_compose(wardrobe: &Wardrobe<FsImageLoader>, args: ComposeArgs) -> anyhow::Result<()> {
    let sex = Sex::from(args.sex);
    let config = AppearanceConfig::new(args.face, args.nose, args.bottoms, args.shoes);
    let img = wardrobe
        .compose(sex, config)
        .with_context(|| format!("compose {sex} base texture"))?;
    write_png(&img, &args.out)
}

fn cmd_resolve(wardrobe: &Wardrobe<FsImageLoader>, args: ResolveArgs) -> anyhow::Result<()> {
    match wardrobe.resolve(&args.key)? {
        Some(Resolution::Image(img)) => write_png(&img, &args.out),
        Some(Resolution::Delegate(action)) => {
            println!("delegate: {action:?}");
            Ok(())
        }
        None => anyhow::bail!("asset key '{}' is not handled", args.key),
    }
}

fn cmd_counts(wardrobe: &Wardrobe<FsImageLoader>) -> anyhow::Result<()> {
    let catalog = wardrobe.catalog();
    for attr in AttributeKind::ALL {
        match catalog.count_for(attr) {
            Ok(n) => println!("{attr}: {n}"),
            Err(err) => println!("{attr}: unavailable ({err})"),
        }
    }
    Ok(())
}

fn write_png(img: &PixelImage, out: &Path) -> anyhow::Result<()> {
    if let Some(parent) = out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    image::save_buffer_with_format(
        out,
        &img.to_rgba8_bytes(),
        img.width(),
        img.height(),
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", out.display()))?;

    eprintln!("wrote {}", out.display());
    Ok(())
}
