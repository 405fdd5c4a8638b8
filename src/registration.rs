//! Registration - Stato del form di registrazione di un punto di raccolta
//!
//! Raccoglie i dati inseriti dall'utente (campi di testo, UF/città scelte
//! dalle liste del provider geografico, coordinate dal click sulla mappa e
//! item selezionati) e produce il body di `POST /points`.

use crate::dtos::CreatePointDTO;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("no state (UF) selected")]
    MissingUf,
    #[error("no city selected")]
    MissingCity,
    #[error("no position selected on the map")]
    MissingPosition,
    #[error("select at least one item")]
    NoItemsSelected,
}

/// Campi di testo liberi del form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Whatsapp,
    Number,
}

#[derive(Debug, Default, Clone)]
pub struct RegistrationForm {
    name: String,
    email: String,
    whatsapp: String,
    number: String,
    selected_uf: Option<String>,
    selected_city: Option<String>,
    selected_position: Option<(f64, f64)>,
    selected_items: Vec<i64>,
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Whatsapp => self.whatsapp = value,
            Field::Number => self.number = value,
        }
    }

    /// Cambiare UF invalida la città: la lista città va ricaricata per la nuova UF
    pub fn select_uf(&mut self, uf: impl Into<String>) {
        let uf = uf.into();
        if self.selected_uf.as_deref() != Some(uf.as_str()) {
            self.selected_city = None;
        }
        self.selected_uf = Some(uf);
    }

    pub fn select_city(&mut self, city: impl Into<String>) {
        self.selected_city = Some(city.into());
    }

    pub fn click_map(&mut self, latitude: f64, longitude: f64) {
        self.selected_position = Some((latitude, longitude));
    }

    /// Seleziona l'item, oppure lo deseleziona se era già selezionato
    pub fn toggle_item(&mut self, item_id: i64) {
        if let Some(index) = self.selected_items.iter().position(|&id| id == item_id) {
            self.selected_items.remove(index);
        } else {
            self.selected_items.push(item_id);
        }
    }

    pub fn selected_uf(&self) -> Option<&str> {
        self.selected_uf.as_deref()
    }

    pub fn selected_city(&self) -> Option<&str> {
        self.selected_city.as_deref()
    }

    pub fn selected_items(&self) -> &[i64] {
        &self.selected_items
    }

    pub fn is_item_selected(&self, item_id: i64) -> bool {
        self.selected_items.contains(&item_id)
    }

    /// Assembla il payload da inviare all'API
    pub fn submission(&self) -> Result<CreatePointDTO, FormError> {
        let uf = self.selected_uf.clone().ok_or(FormError::MissingUf)?;
        let city = self.selected_city.clone().ok_or(FormError::MissingCity)?;
        let (latitude, longitude) = self.selected_position.ok_or(FormError::MissingPosition)?;

        if self.selected_items.is_empty() {
            return Err(FormError::NoItemsSelected);
        }

        Ok(CreatePointDTO {
            name: self.name.clone(),
            email: self.email.clone(),
            whatsapp: self.whatsapp.clone(),
            latitude,
            longitude,
            city,
            number: self.number.clone(),
            uf,
            items: self.selected_items.clone(),
        })
    }
}
