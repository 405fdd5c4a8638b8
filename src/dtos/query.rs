//! Query DTOs - Parametri di ricerca dei punti

use crate::core::AppError;
use serde::Deserialize;

/// Query string grezza di `GET /points?city=..&uf=..&items=1,2`
#[derive(Deserialize, Debug)]
pub struct PointsQuery {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub uf: Option<String>,
    #[serde(default)]
    pub items: Option<String>,
}

/// Filtro già validato, passato al repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointFilter {
    pub city: String,
    pub uf: String,
    pub items: Vec<i64>,
}

impl PointsQuery {
    /// Converte la query string in un `PointFilter`.
    ///
    /// `items` è una lista separata da virgole: i token vengono trimmati,
    /// quelli vuoti ignorati, e qualsiasi token non numerico rifiuta la richiesta.
    pub fn parse(self) -> Result<PointFilter, AppError> {
        let city = self
            .city
            .ok_or_else(|| AppError::bad_request("Missing city filter"))?;
        let uf = self
            .uf
            .ok_or_else(|| AppError::bad_request("Missing uf filter"))?;
        let raw_items = self
            .items
            .ok_or_else(|| AppError::bad_request("Missing items filter"))?;

        let items = raw_items
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(|token| {
                token.parse::<i64>().map_err(|_| {
                    AppError::bad_request("Invalid items filter")
                        .with_details(format!("'{}' is not a valid item id", token))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PointFilter { city, uf, items })
    }
}
