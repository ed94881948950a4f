//! Herramienta Model

use serde::{Deserialize, Serialize};

/// Tool condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EstadoHerramienta {
    Operativa,
    EnReparacion,
    FueraDeServicio,
}

/// Workshop tool entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Herramienta {
    pub id: i64,
    pub nombre: String,
    pub descripcion: Option<String>,
    pub cantidad: i64,
    pub estado: EstadoHerramienta,
    pub ubicacion: Option<String>,
    pub marca_modelo: Option<String>,
    pub creado_en: Option<String>,
    pub actualizado_en: Option<String>,
}

/// Create tool payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HerramientaCreate {
    pub nombre: String,
    pub descripcion: Option<String>,
    pub cantidad: Option<i64>,
    pub estado: Option<EstadoHerramienta>,
    pub ubicacion: Option<String>,
    pub marca_modelo: Option<String>,
}

/// Update tool payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HerramientaUpdate {
    pub nombre: Option<String>,
    pub descripcion: Option<String>,
    pub cantidad: Option<i64>,
    pub estado: Option<EstadoHerramienta>,
    pub ubicacion: Option<String>,
    pub marca_modelo: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn estado_uses_screaming_snake_wire_form() {
        assert_eq!(
            serde_json::to_string(&EstadoHerramienta::EnReparacion).unwrap(),
            "\"EN_REPARACION\""
        );
        let estado: EstadoHerramienta = serde_json::from_str("\"FUERA_DE_SERVICIO\"").unwrap();
        assert_eq!(estado, EstadoHerramienta::FueraDeServicio);
    }
}
