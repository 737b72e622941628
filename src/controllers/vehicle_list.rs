//! Controlador de listado/filtros/paginación
//!
//! Este módulo implementa el componente central de la consola como un
//! reducer explícito: cada interacción es un `ListEvent`, `update` hace la
//! transición de estado y devuelve a lo sumo un `ListEffect` que el caller
//! ejecuta contra el cliente HTTP.
//!
//! Cada fetch lleva un número de secuencia; una respuesta cuya secuencia ya
//! no es la vigente se descarta, así una respuesta vieja que llega tarde
//! nunca pisa una más nueva.

use tracing::{debug, warn};

use crate::client::VehicleApiClient;
use crate::dto::{VehiclePage, VehicleQuery};
use crate::models::Vehicle;

/// Campo de filtro editable por el usuario
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Renavam,
    Plate,
    Model,
    Brand,
}

/// Filtros de búsqueda más el tamaño de página
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleFilters {
    pub renavam: String,
    pub plate: String,
    pub model: String,
    pub brand: String,
    pub limit: u32,
}

impl VehicleFilters {
    pub fn with_limit(limit: u32) -> Self {
        Self {
            renavam: String::new(),
            plate: String::new(),
            model: String::new(),
            brand: String::new(),
            limit,
        }
    }
}

/// Ticket de un fetch en vuelo: secuencia + query ya computada
#[derive(Debug, Clone, PartialEq)]
pub struct FetchTicket {
    pub seq: u64,
    pub query: VehicleQuery,
}

/// Eventos del componente
#[derive(Debug)]
pub enum ListEvent {
    FilterChanged(FilterField, String),
    LimitChanged(u32),
    /// Buscar: vuelve a la página 1 y dispara un fetch
    SearchRequested,
    /// Recargar la página actual (carga inicial, post-save, post-delete)
    RefreshRequested,
    /// Cambio de página; se clampa a `[1, totalPages]`
    PageRequested(u32),
    /// Resultado de un fetch, exitoso o no
    FetchSettled {
        seq: u64,
        outcome: Result<VehiclePage, String>,
    },
}

/// Efectos que el caller debe ejecutar
#[derive(Debug, PartialEq)]
pub enum ListEffect {
    Fetch(FetchTicket),
}

impl ListEffect {
    /// Ejecutar el efecto contra el cliente. Siempre produce un
    /// `FetchSettled`, con lo que el flag de loading nunca queda colgado.
    pub async fn run(self, client: &VehicleApiClient) -> ListEvent {
        match self {
            ListEffect::Fetch(ticket) => {
                let outcome = client
                    .get_vehicles(&ticket.query)
                    .await
                    .map_err(|e| e.to_string());
                ListEvent::FetchSettled {
                    seq: ticket.seq,
                    outcome,
                }
            }
        }
    }
}

/// Estado del listado de vehículos
#[derive(Debug)]
pub struct VehicleListController {
    filters: VehicleFilters,
    current_page: u32,
    vehicles: Vec<Vehicle>,
    total_records: u64,
    loading: bool,
    next_seq: u64,
    in_flight: Option<u64>,
}

impl VehicleListController {
    pub fn new(page_size: u32) -> Self {
        Self {
            filters: VehicleFilters::with_limit(page_size),
            current_page: 1,
            vehicles: Vec::new(),
            total_records: 0,
            loading: false,
            next_seq: 0,
            in_flight: None,
        }
    }

    /// Transición de estado única del componente
    pub fn update(&mut self, event: ListEvent) -> Option<ListEffect> {
        match event {
            ListEvent::FilterChanged(field, value) => {
                match field {
                    FilterField::Renavam => self.filters.renavam = value,
                    FilterField::Plate => self.filters.plate = value,
                    FilterField::Model => self.filters.model = value,
                    FilterField::Brand => self.filters.brand = value,
                }
                None
            }
            ListEvent::LimitChanged(limit) => {
                self.filters.limit = limit;
                None
            }
            ListEvent::SearchRequested => {
                self.current_page = 1;
                Some(self.begin_fetch())
            }
            ListEvent::RefreshRequested => Some(self.begin_fetch()),
            ListEvent::PageRequested(page) => {
                let target = page.clamp(1, self.total_pages());
                if target == self.current_page {
                    return None;
                }
                self.current_page = target;
                Some(self.begin_fetch())
            }
            ListEvent::FetchSettled { seq, outcome } => {
                if self.in_flight != Some(seq) {
                    debug!(seq, "respuesta de fetch obsoleta, descartada");
                    return None;
                }
                self.in_flight = None;
                self.loading = false;
                match outcome {
                    Ok(page) => {
                        self.vehicles = page.vehicles;
                        self.total_records = page.total_records;
                    }
                    Err(message) => {
                        // Lista vacía antes que totales inconsistentes
                        warn!(%message, "fetch de vehículos falló");
                        self.vehicles.clear();
                        self.total_records = 0;
                    }
                }
                None
            }
        }
    }

    fn begin_fetch(&mut self) -> ListEffect {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.in_flight = Some(seq);
        self.loading = true;
        ListEffect::Fetch(FetchTicket {
            seq,
            query: self.query(),
        })
    }

    /// Query con el offset derivado de la página actual
    pub fn query(&self) -> VehicleQuery {
        VehicleQuery {
            renavam: self.filters.renavam.clone(),
            plate: self.filters.plate.clone(),
            model: self.filters.model.clone(),
            brand: self.filters.brand.clone(),
            limit: self.filters.limit,
            offset: u64::from(self.current_page - 1) * u64::from(self.filters.limit),
        }
    }

    /// Total de páginas mostrado: `max(1, ceil(total / limit))`
    pub fn total_pages(&self) -> u32 {
        if self.filters.limit == 0 || self.total_records == 0 {
            return 1;
        }
        let limit = u64::from(self.filters.limit);
        let pages = (self.total_records + limit - 1) / limit;
        pages.max(1).min(u64::from(u32::MAX)) as u32
    }

    pub fn can_go_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    pub fn can_go_back(&self) -> bool {
        self.current_page > 1
    }

    /// Texto de paginación que ve el usuario
    pub fn pagination_label(&self) -> String {
        format!(
            "Página {} de {} ({} veículos)",
            self.current_page,
            self.total_pages(),
            self.total_records
        )
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn total_records(&self) -> u64 {
        self.total_records
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn filters(&self) -> &VehicleFilters {
        &self.filters
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vehicle(id: i64, plate: &str) -> Vehicle {
        Vehicle {
            id,
            plate: plate.to_string(),
            model: "FH 540".to_string(),
            brand: "Volvo".to_string(),
            year: 2022,
            renavam: "12345678901".to_string(),
        }
    }

    fn page(vehicles: Vec<Vehicle>, total: u64) -> VehiclePage {
        VehiclePage {
            vehicles,
            total_records: total,
            current_page: 1,
            page_itens: 10,
        }
    }

    fn ticket(effect: Option<ListEffect>) -> FetchTicket {
        match effect.expect("se esperaba un efecto de fetch") {
            ListEffect::Fetch(ticket) => ticket,
        }
    }

    #[test]
    fn test_offset_es_pagina_menos_uno_por_limit() {
        let mut ctl = VehicleListController::new(10);
        let t = ticket(ctl.update(ListEvent::SearchRequested));
        assert_eq!(t.query.offset, 0);

        ctl.update(ListEvent::FetchSettled {
            seq: t.seq,
            outcome: Ok(page(vec![], 35)),
        });

        let t = ticket(ctl.update(ListEvent::PageRequested(3)));
        assert_eq!(t.query.offset, 20);
        assert_eq!(t.query.limit, 10);
    }

    #[test]
    fn test_total_pages_minimo_uno() {
        let mut ctl = VehicleListController::new(10);
        assert_eq!(ctl.total_pages(), 1);
        assert!(!ctl.can_go_next());
        assert!(!ctl.can_go_back());

        let t = ticket(ctl.update(ListEvent::RefreshRequested));
        ctl.update(ListEvent::FetchSettled {
            seq: t.seq,
            outcome: Ok(page(vec![], 0)),
        });
        assert_eq!(ctl.total_pages(), 1);
        assert!(!ctl.can_go_next());
    }

    #[test]
    fn test_total_pages_con_limit_cero() {
        let mut ctl = VehicleListController::new(0);
        let t = ticket(ctl.update(ListEvent::RefreshRequested));
        ctl.update(ListEvent::FetchSettled {
            seq: t.seq,
            outcome: Ok(page(vec![], 42)),
        });
        // Limit 0: una sola página y sin navegación hacia adelante
        assert_eq!(ctl.total_pages(), 1);
        assert!(!ctl.can_go_next());
    }

    #[test]
    fn test_total_pages_redondea_hacia_arriba() {
        let mut ctl = VehicleListController::new(10);
        let t = ticket(ctl.update(ListEvent::RefreshRequested));
        ctl.update(ListEvent::FetchSettled {
            seq: t.seq,
            outcome: Ok(page(vec![], 21)),
        });
        assert_eq!(ctl.total_pages(), 3);
    }

    #[test]
    fn test_search_vuelve_a_pagina_uno() {
        let mut ctl = VehicleListController::new(10);
        let t = ticket(ctl.update(ListEvent::RefreshRequested));
        ctl.update(ListEvent::FetchSettled {
            seq: t.seq,
            outcome: Ok(page(vec![], 50)),
        });
        let t = ticket(ctl.update(ListEvent::PageRequested(4)));
        ctl.update(ListEvent::FetchSettled {
            seq: t.seq,
            outcome: Ok(page(vec![], 50)),
        });
        assert_eq!(ctl.current_page(), 4);

        let t = ticket(ctl.update(ListEvent::SearchRequested));
        assert_eq!(ctl.current_page(), 1);
        assert_eq!(t.query.offset, 0);
    }

    #[test]
    fn test_cambio_de_pagina_clampado() {
        let mut ctl = VehicleListController::new(10);
        let t = ticket(ctl.update(ListEvent::RefreshRequested));
        ctl.update(ListEvent::FetchSettled {
            seq: t.seq,
            outcome: Ok(page(vec![], 25)),
        });

        // 99 se clampa a la última página (3)
        let t = ticket(ctl.update(ListEvent::PageRequested(99)));
        assert_eq!(ctl.current_page(), 3);
        ctl.update(ListEvent::FetchSettled {
            seq: t.seq,
            outcome: Ok(page(vec![], 25)),
        });
        assert!(!ctl.can_go_next());
        assert!(ctl.can_go_back());

        // Pedir la página actual no dispara fetch
        assert!(ctl.update(ListEvent::PageRequested(3)).is_none());
    }

    #[test]
    fn test_fallo_limpia_lista_y_loading() {
        let mut ctl = VehicleListController::new(10);
        let t = ticket(ctl.update(ListEvent::RefreshRequested));
        ctl.update(ListEvent::FetchSettled {
            seq: t.seq,
            outcome: Ok(page(vec![vehicle(1, "ABC1234")], 1)),
        });
        assert_eq!(ctl.vehicles().len(), 1);

        let t = ticket(ctl.update(ListEvent::RefreshRequested));
        assert!(ctl.loading());
        ctl.update(ListEvent::FetchSettled {
            seq: t.seq,
            outcome: Err("API error (500): Internal Server Error".to_string()),
        });
        assert!(!ctl.loading());
        assert!(ctl.vehicles().is_empty());
        assert_eq!(ctl.total_records(), 0);
        assert_eq!(ctl.pagination_label(), "Página 1 de 1 (0 veículos)");
    }

    #[test]
    fn test_respuesta_obsoleta_descartada() {
        let mut ctl = VehicleListController::new(10);

        // Doble click en buscar: dos fetches en vuelo
        let first = ticket(ctl.update(ListEvent::SearchRequested));
        let second = ticket(ctl.update(ListEvent::SearchRequested));
        assert_ne!(first.seq, second.seq);

        // La primera respuesta llega tarde y se descarta
        ctl.update(ListEvent::FetchSettled {
            seq: first.seq,
            outcome: Ok(page(vec![vehicle(1, "OLD0001")], 1)),
        });
        assert!(ctl.loading());
        assert!(ctl.vehicles().is_empty());

        // La respuesta vigente sí se aplica
        ctl.update(ListEvent::FetchSettled {
            seq: second.seq,
            outcome: Ok(page(vec![vehicle(2, "NEW0002")], 1)),
        });
        assert!(!ctl.loading());
        assert_eq!(ctl.vehicles()[0].plate, "NEW0002");
    }

    #[test]
    fn test_escenario_filtro_por_placa() {
        let mut ctl = VehicleListController::new(10);
        ctl.update(ListEvent::FilterChanged(
            FilterField::Plate,
            "ABC1234".to_string(),
        ));
        let t = ticket(ctl.update(ListEvent::SearchRequested));
        assert_eq!(t.query.plate, "ABC1234");
        assert_eq!(t.query.limit, 10);
        assert_eq!(t.query.offset, 0);

        ctl.update(ListEvent::FetchSettled {
            seq: t.seq,
            outcome: Ok(page(vec![vehicle(1, "ABC1234"), vehicle(2, "ABC1234")], 2)),
        });
        assert_eq!(ctl.vehicles().len(), 2);
        assert_eq!(ctl.pagination_label(), "Página 1 de 1 (2 veículos)");
    }
}
