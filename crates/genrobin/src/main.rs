//! Command-line generator for the ROBIN fuselage and pylon surface meshes.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use log::info;
use robin3d::shape::{RobinBody, TriMesh};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum MeshFormat {
    /// Wavefront text, 1-based indices, full double precision.
    Obj,
    /// ascii PLY.
    Ply,
    /// binary STL.
    Stl,
}

impl MeshFormat {
    fn extension(self) -> &'static str {
        match self {
            MeshFormat::Obj => "obj",
            MeshFormat::Ply => "ply",
            MeshFormat::Stl => "stl",
        }
    }
}

/// Generates triangulated surface meshes for the ROBIN generic helicopter
/// fuselage and pylon.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Number of lengthwise elements for the fuselage.
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    nx_fuselage: u32,
    /// Number of circumferential elements for the fuselage.
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    nt_fuselage: u32,
    /// Number of lengthwise elements for the pylon.
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    nx_pylon: u32,
    /// Number of circumferential elements for the pylon.
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    nt_pylon: u32,
    /// Output mesh file format.
    #[arg(long, value_enum, default_value_t = MeshFormat::Obj)]
    format: MeshFormat,
    /// Directory the mesh files are written into.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
}

fn write_mesh(
    body: RobinBody,
    nx: u32,
    nt: u32,
    format: MeshFormat,
    path: &Path,
) -> anyhow::Result<()> {
    let (vertices, indices) = body.to_trimesh(nx, nt)?;
    let mesh = TriMesh::new(vertices, indices)?;

    info!(
        "writing {:?} ({} vertices, {} triangles) to {}",
        body,
        mesh.vertices().len(),
        mesh.num_triangles(),
        path.display()
    );

    match format {
        MeshFormat::Obj => mesh.to_obj_file(path),
        MeshFormat::Ply => mesh.to_ply_file(path),
        MeshFormat::Stl => mesh.to_stl_file(path),
    }
    .with_context(|| format!("failed to write {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )?;

    let args = Args::parse();
    let ext = args.format.extension();

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("failed to create {}", args.out_dir.display()))?;

    info!("generating ROBIN geometry");
    write_mesh(
        RobinBody::Fuselage,
        args.nx_fuselage,
        args.nt_fuselage,
        args.format,
        &args.out_dir.join(format!("robinFuselage.{ext}")),
    )?;
    write_mesh(
        RobinBody::Pylon,
        args.nx_pylon,
        args.nt_pylon,
        args.format,
        &args.out_dir.join(format!("robinPylon.{ext}")),
    )?;

    Ok(())
}
