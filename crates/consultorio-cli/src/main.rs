//! Sistema de gestión de turnos para un consultorio médico.

mod menus;
mod ui;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use consultorio_core::Store;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "consultorio",
    about = "Sistema de gestión de turnos - consultorio médico"
)]
struct Args {
    /// Directorio de los documentos JSON
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,

    /// Directorio donde se guardan los informes
    #[arg(long, default_value = "informes")]
    reports_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    // Quiet by default so log lines never mix into the menus.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let store = Store::open(&args.data_dir)
        .with_context(|| format!("no se pudo abrir {}", args.data_dir.display()))?;

    loop {
        ui::clear_screen();
        ui::say(&"=".repeat(60));
        ui::say("SISTEMA DE GESTIÓN DE TURNOS - CONSULTORIO MÉDICO");
        ui::say(&"=".repeat(60));
        ui::blank();
        ui::say("1. Gestión de Pacientes");
        ui::say("2. Gestión de Turnos");
        ui::say("3. Configuración y Generación");
        ui::say("4. Informes y Reportes");
        ui::say("5. Salir");
        ui::blank();

        match ui::prompt("Seleccione una opción (1-5): ").as_str() {
            "1" => menus::patients::menu(&store),
            "2" => menus::slots::menu(&store),
            "3" => menus::schedule::menu(&store),
            "4" => menus::reports::menu(&store, &args.reports_dir),
            "5" => {
                ui::clear_screen();
                ui::say("¡Gracias por usar el sistema!");
                ui::say("Hasta luego");
                return Ok(());
            }
            _ => {
                ui::say("❌ Opción inválida. Seleccione una opción del 1 al 5.");
                ui::pause();
            }
        }
    }
}
