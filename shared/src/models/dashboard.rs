//! Dashboard Models

use serde::{Deserialize, Serialize};

use super::orden::EstadoOrden;

/// Today's work order counts by state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumenHoy {
    pub total: i64,
    pub en_espera: i64,
    pub en_reparacion: i64,
    pub finalizadas: i64,
    pub canceladas: i64,
}

/// Compact active-order row for the dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrdenActiva {
    pub id: i64,
    pub estado: Option<EstadoOrden>,
    pub cliente: Option<String>,
    pub moto: Option<String>,
    pub mecanico: Option<String>,
    pub fecha_ingreso: Option<String>,
}

/// Recent-activity feed entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actividad {
    pub tipo: String,
    pub titulo: String,
    pub detalle: String,
    pub hace: String,
}

/// Home dashboard summary (`GET /api/dashboard/resumen`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumenDashboard {
    pub resumen_hoy: ResumenHoy,
    pub clientes_activos: i64,
    pub ingresos_hoy_q: f64,
    pub mecanicos_disponibles: i64,
    pub mecanicos_total: i64,
    pub ordenes_activas_hoy: Vec<OrdenActiva>,
    pub actividad_reciente: Vec<Actividad>,
}

/// Work-order-centric summary (`GET /api/ordenes/dashboard_hoy`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardHoy {
    pub resumen_hoy: ResumenHoy,
    pub ordenes_activas_hoy: Vec<OrdenActiva>,
}
