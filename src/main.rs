use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::time::Instant;

use npgen::{generate_nanoparticle, util::timing::format_duration, BuildConfig, ShapeKind};

#[derive(Parser)]
#[command(author, version, about = "Polyhedral FCC nanoparticle generator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// One driver per packaged material, plus a generic escape hatch for
/// anything with an FCC lattice.
#[derive(Subcommand)]
enum Commands {
    /// Gold (a = 4.08 A, r = 1.44 A).
    Gold(CommonArgs),
    /// Silver (a = 4.09 A, r = 1.44 A).
    Silver(CommonArgs),
    /// Copper (a = 3.615 A, r = 1.28 A).
    Copper(CommonArgs),
    /// Platinum (a = 3.92 A, r = 1.39 A).
    Platinum(CommonArgs),
    /// Aluminium (a = 4.05 A, r = 1.43 A).
    Aluminium(CommonArgs),
    /// Any FCC material: supply element, atomic radius and lattice constant.
    Generic(GenericArgs),
}

#[derive(Args)]
struct CommonArgs {
    /// Outer radius of the bounding shape, as a decimal string.
    #[arg(short, long)]
    radius: String,

    /// Radius unit: pm, A, Å, Angstrom, nm.
    #[arg(short, long, default_value = "A")]
    unit: String,

    /// Bounding shape, kebab-case, with optional :levo / :biscribed
    /// qualifiers (e.g. "rhombic-triacontahedron",
    /// "snub-cuboctahedron:levo:biscribed").
    #[arg(short, long, default_value = "sphere")]
    shape: String,

    /// Significant decimal digits carried through all arithmetic.
    #[arg(short, long, default_value_t = 100)]
    precision: usize,

    /// Output file stem; defaults to "<material>_<shape>".
    #[arg(short, long)]
    output: Option<String>,

    /// Also write build_debug_<stem>.csv with every in-bounds grid point.
    #[arg(long)]
    debug_csv: bool,
}

#[derive(Args)]
struct GenericArgs {
    #[command(flatten)]
    common: CommonArgs,

    /// Element symbol for the basis (e.g. "Ni").
    #[arg(long)]
    element: String,

    /// Atomic radius in angstroms (decimal string).
    #[arg(long)]
    atomic_radius: String,

    /// Cubic lattice constant in angstroms (decimal string).
    #[arg(long)]
    lattice_constant: String,

    /// Formal charge per atom.
    #[arg(long, default_value_t = 0)]
    charge: i32,
}

struct Material {
    name: String,
    element: String,
    atomic_radius: String,
    lattice_constant: String,
}

impl Material {
    fn preset(name: &str, element: &str, atomic_radius: &str, lattice_constant: &str) -> Material {
        Material {
            name: name.into(),
            element: element.into(),
            atomic_radius: atomic_radius.into(),
            lattice_constant: lattice_constant.into(),
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let (material, common, charge) = match cli.command {
        Commands::Gold(c) => (Material::preset("gold", "Au", "1.44", "4.08"), c, 0),
        Commands::Silver(c) => (Material::preset("silver", "Ag", "1.44", "4.09"), c, 0),
        Commands::Copper(c) => (Material::preset("copper", "Cu", "1.28", "3.615"), c, 0),
        Commands::Platinum(c) => (Material::preset("platinum", "Pt", "1.39", "3.92"), c, 0),
        Commands::Aluminium(c) => (Material::preset("aluminium", "Al", "1.43", "4.05"), c, 0),
        Commands::Generic(g) => (
            Material {
                name: "generic".into(),
                element: g.element,
                atomic_radius: g.atomic_radius,
                lattice_constant: g.lattice_constant,
            },
            g.common,
            g.charge,
        ),
    };

    let shape: ShapeKind = common.shape.parse()?;
    let stem = common
        .output
        .clone()
        .unwrap_or_else(|| format!("{}_{}", material.name, shape.name().replace(':', "_")));

    println!("--- Nanoparticle Generator ---");
    println!(
        "Material: {} ({}), shape: {}, radius: {} {}",
        material.name, material.element, shape.name(), common.radius, common.unit
    );

    let config = BuildConfig {
        shape,
        radius: common.radius.clone(),
        radius_unit: common.unit.clone(),
        lattice_type: "FCC".into(),
        element: material.element.clone(),
        atomic_radius: material.atomic_radius.clone(),
        formal_charge: charge,
        lattice_constant: material.lattice_constant.clone(),
        precision: common.precision,
        file_name: stem.clone(),
        structure_name: format!("{}_{}", material.element, shape.name()),
        structure_index: "1".into(),
        debug_csv: common.debug_csv,
    };

    let start = Instant::now();
    let report = generate_nanoparticle(&config)?;

    println!("\nSuccess!");
    println!(
        "-> {} atoms ({} of {} grid points in bounds)",
        report.atoms, report.points_inside, report.grid_points
    );
    println!("-> Wrote {:?}", report.output);
    if let Some(dbg) = &report.debug_output {
        println!("-> Wrote {dbg:?}");
    }
    println!("Done in {}", format_duration(start.elapsed()));

    Ok(())
}
