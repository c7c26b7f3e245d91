//! Command-line front-end for the scene asset inspector
//!
//! Presentation lives here, outside the library: the report is computed as
//! plain data and rendered as fixed-width console text.

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use asset_inspector::{
    Importer, Report, ReportOptions, Sections, build_report,
    report::{AggregateBounds, ReportEntry},
    types::Vector3D,
    version::CRATE_VERSION,
};

const RULE_WIDTH: usize = 110;

const USAGE: &str = "\
Usage: asset-inspector <FILE.glb> [options]

Options:
  --variant <keyword>     Substring (case-insensitive) selecting variant meshes [default: orange]
  --highlight <material>  Exact material name to highlight [default: Display_orange]
  --sections <list>       Comma-separated sections to print: table,highlight,variant [default: all]
  -h, --help              Print this help text
  -V, --version           Print the crate version";

struct CliArgs {
    path: PathBuf,
    options: ReportOptions,
    sections: Sections,
}

impl CliArgs {
    fn parse(args: &[String]) -> Result<Self, String> {
        let mut path = None;
        let mut options = ReportOptions::default();
        let mut sections = Sections::default();

        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--variant" => {
                    options.variant_keyword = iter
                        .next()
                        .ok_or("--variant requires a keyword")?
                        .clone();
                }
                "--highlight" => {
                    options.highlight_material = iter
                        .next()
                        .ok_or("--highlight requires a material name")?
                        .clone();
                }
                "--sections" => {
                    sections = parse_sections(
                        iter.next().ok_or("--sections requires a list")?,
                    )?;
                }
                other if other.starts_with('-') => {
                    return Err(format!("unknown option: {other}"));
                }
                _ => {
                    if path.replace(PathBuf::from(arg)).is_some() {
                        return Err("more than one input file given".to_owned());
                    }
                }
            }
        }

        Ok(Self {
            path: path.ok_or("missing input file")?,
            options,
            sections,
        })
    }
}

fn parse_sections(list: &str) -> Result<Sections, String> {
    let mut sections = Sections::empty();
    for name in list.split(',') {
        sections |= match name.trim() {
            "table" => Sections::MESH_TABLE,
            "highlight" => Sections::HIGHLIGHT,
            "variant" => Sections::VARIANT_SUMMARY,
            other => return Err(format!("unknown section: {other}")),
        };
    }
    Ok(sections)
}

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        println!("{USAGE}");
        return ExitCode::SUCCESS;
    }
    if args.iter().any(|a| a == "-V" || a == "--version") {
        println!("asset-inspector {CRATE_VERSION}");
        return ExitCode::SUCCESS;
    }

    let cli = match CliArgs::parse(&args) {
        Ok(cli) => cli,
        Err(message) => {
            eprintln!("error: {message}\n\n{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &CliArgs) -> asset_inspector::Result<()> {
    let scene = Importer::new().import_file(&cli.path)?;
    let report = build_report(&scene, &cli.options)?;
    render(&report, &cli.options, cli.sections);
    Ok(())
}

fn render(report: &Report, options: &ReportOptions, sections: Sections) {
    println!("Total meshes in file: {}\n", report.entries.len());

    if sections.contains(Sections::MESH_TABLE) {
        render_mesh_table(report, options);
    }
    if sections.contains(Sections::HIGHLIGHT) {
        render_highlight(report, options);
    }
    if sections.contains(Sections::VARIANT_SUMMARY) {
        render_variant(report.variant.as_ref(), options);
    }

    println!("\nDone.");
}

fn render_mesh_table(report: &Report, options: &ReportOptions) {
    let rule = "=".repeat(RULE_WIDTH);
    println!("{rule}");
    println!("  ALL MESHES  (index | name | material(s) | world AABB min | world AABB max)");
    println!("{rule}");

    let tag = format!("  <-- {}", options.variant_keyword.to_uppercase());
    for entry in &report.entries {
        let materials = entry.materials.join(", ");
        let marker = if entry.matches_keyword(&options.variant_keyword) {
            tag.as_str()
        } else {
            ""
        };
        println!(
            "[{:>2}] {:<40} mat: {:<30} {}{}",
            entry.index,
            entry.name,
            materials,
            fmt_bounds(entry, 4),
            marker,
        );
    }
}

fn render_highlight(report: &Report, options: &ReportOptions) {
    let rule = "=".repeat(RULE_WIDTH);
    println!("\n{rule}");
    println!(
        "  {} MESH DETAILS",
        options.highlight_material.to_uppercase()
    );
    println!("{rule}");

    let Some(entry) = report.highlighted_entry() else {
        println!(
            "  *** No mesh found with material \"{}\" ***",
            options.highlight_material
        );
        return;
    };

    println!("  Mesh name:    {}", entry.name);
    println!("  Material(s):  {}", entry.materials.join(", "));
    if entry.bounds.aabb.is_valid() {
        let aabb = entry.bounds.aabb;
        println!("  AABB min:     {}", fmt_vec3(aabb.min, 6));
        println!("  AABB max:     {}", fmt_vec3(aabb.max, 6));
        println!("  Center:       {}", fmt_vec3(aabb.center(), 6));
        println!(
            "  Dimensions:   {}  (W x H x D)",
            fmt_vec3(aabb.size(), 6)
        );
    } else {
        println!("  AABB:         (empty)");
    }
    println!("  Vertices:     {}", entry.bounds.vertex_count);
}

fn render_variant(variant: Option<&AggregateBounds>, options: &ReportOptions) {
    let rule = "=".repeat(RULE_WIDTH);
    let keyword = options.variant_keyword.to_uppercase();
    println!("\n{rule}");
    println!("  {keyword} VARIANT - OVERALL BOUNDING BOX & CENTER");
    println!("{rule}");

    let Some(variant) = variant else {
        println!(
            "  *** No {} variant meshes found ***",
            options.variant_keyword
        );
        return;
    };

    println!("  Matching meshes:     {}", variant.count);
    println!("  Mesh names:          {}", variant.mesh_names.join(", "));
    match (variant.center(), variant.dimensions()) {
        (Some(center), Some(dimensions)) => {
            println!("  Overall AABB min:    {}", fmt_vec3(variant.aabb.min, 6));
            println!("  Overall AABB max:    {}", fmt_vec3(variant.aabb.max, 6));
            println!("  Center position:     {}", fmt_vec3(center, 6));
            println!(
                "  Total dimensions:    {}  (W x H x D)",
                fmt_vec3(dimensions, 6)
            );
        }
        _ => println!("  Overall AABB:        (empty)"),
    }
}

fn fmt_bounds(entry: &ReportEntry, precision: usize) -> String {
    if entry.bounds.aabb.is_valid() {
        format!(
            "min: {}  max: {}",
            fmt_vec3(entry.bounds.aabb.min, precision),
            fmt_vec3(entry.bounds.aabb.max, precision),
        )
    } else {
        "bounds: (empty)".to_owned()
    }
}

fn fmt_vec3(v: Vector3D, precision: usize) -> String {
    format!(
        "[{:.prec$}, {:.prec$}, {:.prec$}]",
        v.x,
        v.y,
        v.z,
        prec = precision
    )
}
