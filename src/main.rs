//! Consola de terminal GeoTruck
//!
//! Menú interactivo sobre stdin que maneja la flota contra el backend HTTP:
//! listado con filtros y paginación, alta/edición/baja con confirmación,
//! upload de rutas y resumen de la ruta de un vehículo.

use anyhow::Result;
use colored::*;
use std::io::{self, Write};
use tracing::{error, info};

use geotruck_console::config::environment::EnvironmentConfig;
use geotruck_console::controllers::{FilterField, ListEvent, RouteMapView, VehicleForm};
use geotruck_console::models::Vehicle;
use geotruck_console::state::{confirms_deletion, ConsoleState};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = EnvironmentConfig::default();
    info!("API base: {}", config.api_base_url);

    println!(
        "{}",
        "🚚 GeoTruck - Sistema de Gerenciamento de Veículos"
            .bright_blue()
            .bold()
    );
    println!("{}", "==================================================".bright_blue());

    let mut state = ConsoleState::new(config)?;

    // Carga inicial de la primera página
    state.dispatch_list(ListEvent::RefreshRequested).await;

    loop {
        println!();
        render_table(&state);
        println!();
        println!("{}", "📋 MENU".bright_green().bold());
        println!("1. 🔍 Buscar (aplica filtros)");
        println!("2. ➡️  Próxima página");
        println!("3. ⬅️  Página anterior");
        println!("4. 🧰 Editar filtros");
        println!("5. ➕ Novo veículo");
        println!("6. ✏️  Editar veículo");
        println!("7. 🗑️  Excluir veículo");
        println!("8. 📤 Upload de rotas");
        println!("9. 🗺️  Ver rota");
        println!("0. 🚪 Sair");

        let choice = read_line("Selecione uma opção: ")?;
        match choice.as_str() {
            "1" => state.dispatch_list(ListEvent::SearchRequested).await,
            "2" => {
                if state.list.can_go_next() {
                    let next = state.list.current_page() + 1;
                    state.dispatch_list(ListEvent::PageRequested(next)).await;
                } else {
                    println!("{}", "Já está na última página".yellow());
                }
            }
            "3" => {
                if state.list.can_go_back() {
                    let prev = state.list.current_page() - 1;
                    state.dispatch_list(ListEvent::PageRequested(prev)).await;
                } else {
                    println!("{}", "Já está na primeira página".yellow());
                }
            }
            "4" => edit_filters(&mut state).await?,
            "5" => save_vehicle(&mut state, VehicleForm::create()).await?,
            "6" => edit_vehicle(&mut state).await?,
            "7" => delete_vehicle(&mut state).await?,
            "8" => upload_routes(&mut state).await?,
            "9" => view_route(&mut state).await?,
            "0" => {
                println!("{}", "👋 Até logo!".bright_green());
                break;
            }
            _ => println!("{}", "❌ Opção inválida".bright_red()),
        }
    }

    Ok(())
}

/// Render de la tabla de la página actual
fn render_table(state: &ConsoleState) {
    println!(
        "{:<6} {:<10} {:<20} {:<16} {:<6} {:<12}",
        "Id".bold(),
        "Placa".bold(),
        "Modelo".bold(),
        "Marca".bold(),
        "Ano".bold(),
        "RENAVAM".bold()
    );

    if state.list.loading() {
        println!("{}", "Carregando...".yellow());
    } else if state.list.vehicles().is_empty() {
        println!("{}", "Nenhum veículo encontrado".yellow());
    } else {
        for vehicle in state.list.vehicles() {
            println!(
                "{:<6} {:<10} {:<20} {:<16} {:<6} {:<12}",
                vehicle.id, vehicle.plate, vehicle.model, vehicle.brand, vehicle.year, vehicle.renavam
            );
        }
    }

    println!("{}", state.list.pagination_label().bright_cyan());
}

/// Editar los cuatro filtros y el tamaño de página
async fn edit_filters(state: &mut ConsoleState) -> Result<()> {
    let fields = [
        (FilterField::Renavam, "RENAVAM"),
        (FilterField::Plate, "Placa"),
        (FilterField::Model, "Modelo"),
        (FilterField::Brand, "Marca"),
    ];

    for (field, label) in fields {
        let value = read_line(&format!("{} (vazio para não filtrar): ", label))?;
        state.list.update(ListEvent::FilterChanged(field, value));
    }

    let limit = read_line("Itens por página (vazio mantém): ")?;
    if let Ok(limit) = limit.parse::<u32>() {
        state.list.update(ListEvent::LimitChanged(limit));
    }

    // Filtros nuevos: buscar desde la página 1
    state.dispatch_list(ListEvent::SearchRequested).await;
    Ok(())
}

/// Completar el formulario y hacer create-or-update; el "modal" se cierra
/// solo si la API respondió con éxito.
async fn save_vehicle(state: &mut ConsoleState, mut form: VehicleForm) -> Result<()> {
    let title = if form.is_edit() {
        "✏️  Editar Veículo"
    } else {
        "➕ Novo Veículo"
    };
    println!("{}", title.bright_cyan().bold());

    form.plate = read_line_default("Placa", &form.plate)?;
    form.model = read_line_default("Modelo", &form.model)?;
    form.brand = read_line_default("Marca", &form.brand)?;
    form.year = read_line_default("Ano", &form.year)?;
    form.renavam = read_line_default("RENAVAM", &form.renavam)?;

    let data = match form.submit() {
        Ok(data) => data,
        Err(e) => {
            // Sin datos válidos no hay llamada a la API
            println!("{} {}", "❌ Dados inválidos:".bright_red(), e);
            return Ok(());
        }
    };

    let editing_id = form.editing_id();
    state.form = Some(form);

    let result = match editing_id {
        Some(id) => state.client.update_vehicle(id, &data).await,
        None => state.client.create_vehicle(&data).await,
    };

    match result {
        Ok(saved) => {
            println!("{} {}", "✅ Veículo salvo:".bright_green(), saved.plate);
            // El modal se cierra solo con éxito
            state.form = None;
            state.dispatch_list(ListEvent::RefreshRequested).await;
        }
        Err(e) => {
            error!("erro ao salvar veículo: {}", e);
            println!("{}", "❌ Erro ao salvar veículo".bright_red());
        }
    }
    Ok(())
}

async fn edit_vehicle(state: &mut ConsoleState) -> Result<()> {
    match pick_vehicle(state)? {
        Some(vehicle) => save_vehicle(state, VehicleForm::edit(&vehicle)).await,
        None => Ok(()),
    }
}

/// Excluir con confirmación: recusar no emite ninguna llamada
async fn delete_vehicle(state: &mut ConsoleState) -> Result<()> {
    let Some(vehicle) = pick_vehicle(state)? else {
        return Ok(());
    };

    let answer = read_line(&format!(
        "Deseja realmente excluir o veículo {}? (s/n): ",
        vehicle.plate
    ))?;

    match state.delete_vehicle(vehicle.id, confirms_deletion(&answer)).await {
        Ok(true) => println!("{}", "✅ Veículo excluído".bright_green()),
        Ok(false) => {}
        Err(e) => {
            error!("erro ao excluir veículo: {}", e);
            println!("{}", "❌ Erro ao excluir veículo".bright_red());
        }
    }
    Ok(())
}

async fn upload_routes(state: &mut ConsoleState) -> Result<()> {
    println!("{}", "📤 Upload de Rotas".bright_cyan().bold());
    let path = read_line("Arquivo de rotas (.json): ")?;
    if path.is_empty() {
        println!("{}", "Nenhum arquivo selecionado".yellow());
        return Ok(());
    }

    state.upload.choose(path);
    match state.upload.submit(&state.client).await {
        Ok(result) => {
            println!(
                "{} ({} posições importadas)",
                "✅ Arquivo enviado com sucesso!".bright_green(),
                result.imported
            );
            if let Some(message) = result.message {
                println!("{}", message);
            }
        }
        Err(e) => {
            error!("erro no upload: {}", e);
            println!("{} {}", "❌ Erro no upload:".bright_red(), e);
        }
    }
    Ok(())
}

/// Resumen textual de la vista de mapa: centro, zoom, marcadores y camino
async fn view_route(state: &mut ConsoleState) -> Result<()> {
    let Some(vehicle) = pick_vehicle(state)? else {
        return Ok(());
    };

    println!(
        "{} {} - {}",
        "🗺️  Rota do Veículo".bright_cyan().bold(),
        vehicle.plate,
        vehicle.model
    );

    state.map = Some(RouteMapView::open(vehicle));
    let map = state.map.as_mut().unwrap();
    if let Err(e) = map.load(&state.client).await {
        error!("erro ao carregar rota: {}", e);
        println!("{}", "❌ Erro ao carregar rota".bright_red());
        state.map = None;
        return Ok(());
    }

    let center = map.center();
    println!(
        "Centro: ({:.6}, {:.6})  zoom {}",
        center.latitude,
        center.longitude,
        map.zoom()
    );

    if map.path().is_empty() {
        println!("{}", "Nenhuma posição de rota registrada".yellow());
    } else {
        let start = map.start_marker().unwrap();
        let end = map.end_marker().unwrap();
        println!("Início: ({:.6}, {:.6})", start.latitude, start.longitude);
        println!("Fim:    ({:.6}, {:.6})", end.latitude, end.longitude);
        println!("Trajeto com {} posições", map.path().len());
    }

    // Cerrar la vista descarta el estado de la ruta
    state.map = None;
    Ok(())
}

/// Elegir un vehículo de la página actual por id
fn pick_vehicle(state: &ConsoleState) -> Result<Option<Vehicle>> {
    let input = read_line("Id do veículo: ")?;
    let Ok(id) = input.parse::<i64>() else {
        println!("{}", "❌ Id inválido".bright_red());
        return Ok(None);
    };

    let vehicle = state.list.vehicles().iter().find(|v| v.id == id).cloned();
    if vehicle.is_none() {
        println!("{}", "Veículo não está na página atual".yellow());
    }
    Ok(vehicle)
}

fn read_line(prompt: &str) -> Result<String> {
    print!("{}", prompt.bright_yellow());
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Leer un campo con valor actual como default (enter mantiene)
fn read_line_default(label: &str, current: &str) -> Result<String> {
    let input = read_line(&format!("{} [{}]: ", label, current))?;
    if input.is_empty() {
        Ok(current.to_string())
    } else {
        Ok(input)
    }
}
