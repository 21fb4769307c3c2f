use crate::LayoutError;
use crate::band::Band;
use crate::component::is_valid_identifier;
use crate::objects::ReportObject;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A report page: the only container that accepts bands. Component names
/// are unique page-wide, across bands, their child chains and everything
/// the bands own.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportPage {
    pub name: String,
    bands: Vec<Band>,
}

impl ReportPage {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bands: Vec::new(),
        }
    }

    pub fn bands(&self) -> &[Band] {
        &self.bands
    }

    pub fn bands_mut(&mut self) -> std::slice::IterMut<'_, Band> {
        self.bands.iter_mut()
    }

    pub fn add_band(&mut self, band: Band) -> Result<(), LayoutError> {
        let mut existing = HashSet::new();
        for b in &self.bands {
            collect_band_names(b, &mut existing);
        }
        let mut incoming = HashSet::new();
        collect_band_names(&band, &mut incoming);
        for name in &incoming {
            if !is_valid_identifier(name) {
                return Err(LayoutError::InvalidName(name.clone()));
            }
            if existing.contains(name) {
                return Err(LayoutError::DuplicateName(name.clone()));
            }
        }
        self.bands.push(band);
        Ok(())
    }

    /// Generic attach surface: a page rejects everything that is not a
    /// band.
    pub fn add_object(&mut self, object: ReportObject) -> Result<(), LayoutError> {
        match object {
            ReportObject::Band(band) => self.add_band(band),
            other => Err(LayoutError::CannotContain {
                parent: self.name.clone(),
                child: other.kind().as_str(),
            }),
        }
    }

    pub fn find_band(&self, name: &str) -> Option<&Band> {
        self.bands.iter().find(|b| b.name() == name)
    }
}

fn collect_band_names(band: &Band, out: &mut HashSet<String>) {
    out.insert(band.name().to_owned());
    for obj in band.objects() {
        collect_object_names(obj, out);
    }
    if let Some(child) = &band.child {
        collect_band_names(child, out);
    }
}

fn collect_object_names(obj: &ReportObject, out: &mut HashSet<String>) {
    out.insert(obj.name().to_owned());
    match obj {
        ReportObject::Panel(panel) => {
            for child in &panel.objects {
                collect_object_names(child, out);
            }
        }
        ReportObject::Band(band) => collect_band_names(band, out),
        _ => {}
    }
}
