//! The shipped template catalog.
//!
//! Each rich template lives in its own module; the long tail of single-page
//! forms is described as data in [`simple`].

mod commercial_rentals;
mod construction;
mod deposit_refund;
mod eviction;
mod family;
mod housing_transfer;
mod justified_termination;
mod labor;
mod leave;
mod partnership;
mod rent_determination;
mod rent_increase;
mod rent_receipt;
mod rent_termination;
mod rental_agreements;
mod residential_lease;
mod resignation;
mod sale_service;
mod simple;
mod sublease;
mod tenant_letters;
mod unjust_termination;

pub use commercial_rentals::{CommercialLease, VehicleRental, WarehouseRental};
pub use construction::ConstructionAgreement;
pub use deposit_refund::DepositRefund;
pub use eviction::{EvictionNotice, EvictionPetition, EVICTION_REASONS};
pub use family::{DivorceAgreement, ParentConsent};
pub use housing_transfer::HousingTransfer;
pub use justified_termination::JustifiedTerminationLawsuit;
pub use leave::LeaveLetter;
pub use partnership::Partnership;
pub use rent_determination::RentDetermination;
pub use rent_increase::RentIncreaseNotice;
pub use rent_receipt::RentReceipt;
pub use rent_termination::RentTermination;
pub use rental_agreements::{FurnishedHousing, RentRenewal};
pub use residential_lease::ResidentialLease;
pub use resignation::ResignationLetter;
pub use sale_service::{SaleAgreement, ServiceAgreement};
pub use simple::{derive_label, infer_kind, SimpleSpec, SimpleTemplate, SIMPLE_CATALOG};
pub use sublease::{Sublease, SubleaseApproval};
pub use tenant_letters::{RenovationRequest, RentDelayNotice, RentIncreaseObjection, TenantTermination};
pub use unjust_termination::UnjustTerminationLawsuit;

use super::document::{Block, Section};
use super::registry::{CatalogError, TemplateRegistry};
use super::schema::{FieldSpec, RepeatedGroup};
use super::slots::Slots;

pub(crate) fn register_all(registry: &mut TemplateRegistry) -> Result<(), CatalogError> {
    registry.register(UnjustTerminationLawsuit::new())?;
    registry.register(JustifiedTerminationLawsuit::new())?;
    for letter in LeaveLetter::family() {
        registry.register(letter)?;
    }
    registry.register(ResignationLetter::new())?;

    registry.register(HousingTransfer::new())?;
    registry.register(SubleaseApproval::new())?;
    registry.register(EvictionPetition::new())?;
    registry.register(RentDetermination::new())?;
    registry.register(EvictionNotice::new())?;
    registry.register(RentIncreaseNotice::new())?;
    registry.register(RentReceipt::new())?;
    registry.register(RentDelayNotice::new())?;
    registry.register(DepositRefund::new())?;
    registry.register(TenantTermination::new())?;
    registry.register(RentTermination::new())?;
    registry.register(RentRenewal::new())?;
    registry.register(Sublease::new())?;
    registry.register(RentIncreaseObjection::new())?;
    registry.register(RenovationRequest::new())?;
    registry.register(FurnishedHousing::new())?;
    registry.register(ResidentialLease::new())?;

    registry.register(ConstructionAgreement::new())?;
    registry.register(CommercialLease::new())?;
    registry.register(VehicleRental::new())?;
    registry.register(WarehouseRental::new())?;
    registry.register(SaleAgreement::new())?;
    registry.register(ServiceAgreement::new())?;
    registry.register(Partnership::new())?;

    registry.register(ParentConsent::new())?;
    registry.register(DivorceAgreement::new())?;

    for spec in SIMPLE_CATALOG {
        registry.register(SimpleTemplate::new(spec))?;
    }

    Ok(())
}

/// Party block shared by the housing notices: the name is always shown, the
/// identity number and address only when given.
fn party(heading: &str, slots: &Slots<'_>, name: &str, id: &str, address: &str) -> Section {
    identified(heading, slots, name, id).blocks(optional_labeled("Adres", slots.optional(address)))
}

/// Party block for a side whose address the document does not ask for.
fn identified(heading: &str, slots: &Slots<'_>, name: &str, id: &str) -> Section {
    Section::titled(heading)
        .labeled("Ad Soyad", slots.text(name))
        .blocks(optional_labeled("TC", slots.optional(id)))
}

/// Titled bullet list of contract terms; terms left out of the form are
/// skipped.
fn terms(heading: &str, items: impl IntoIterator<Item = Option<String>>) -> Section {
    Section::titled(heading).bullets(items.into_iter().flatten().collect())
}

/// `"{label}: {value}"` when the field is filled.
fn term(slots: &Slots<'_>, label: &str, key: &str) -> Option<String> {
    slots.optional(key).map(|value| format!("{label}: {value}"))
}

/// Like [`term`] with the value formatted as money.
fn money_term(slots: &Slots<'_>, label: &str, key: &str) -> Option<String> {
    (!slots.is_blank(key)).then(|| format!("{label}: {}", slots.money(key)))
}

/// Like [`term`] with the value formatted as a date; unparseable dates are
/// dropped with the blanks.
fn date_term(slots: &Slots<'_>, label: &str, key: &str) -> Option<String> {
    let date = slots.date_or(key, "");
    (!date.is_empty()).then(|| format!("{label}: {date}"))
}

fn optional_labeled(label: &str, value: Option<String>) -> Option<Block> {
    value.map(|value| Block::labeled(label, value))
}

/// Date line followed by one signature.
fn closing(date: String, role: &str, name: String) -> Section {
    Section::untitled().labeled("Tarih", date).signature(role, name)
}

fn group_of<'a>(fields: &'a [FieldSpec], key: &str) -> Option<&'a RepeatedGroup> {
    fields
        .iter()
        .find(|field| field.key == key)
        .and_then(FieldSpec::as_group)
}

fn landlord_fields(address_required: bool) -> Vec<FieldSpec> {
    let address = FieldSpec::text_area("kirayaVerenAdres", "Kiraya Veren Adres");
    vec![
        FieldSpec::text("kirayaVerenAd", "Kiraya Veren Ad Soyad").required(),
        FieldSpec::text("kirayaVerenTC", "Kiraya Veren TC Kimlik No").max_length(11),
        if address_required {
            address.required()
        } else {
            address
        },
    ]
}

fn tenant_fields(address_required: bool) -> Vec<FieldSpec> {
    let address = FieldSpec::text_area("kiracıAdres", "Kiracı Adres");
    vec![
        FieldSpec::text("kiracıAd", "Kiracı Ad Soyad").required(),
        FieldSpec::text("kiracıTC", "Kiracı TC Kimlik No").max_length(11),
        if address_required {
            address.required()
        } else {
            address
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::form::FormData;
    use crate::templates::slots::PLACEHOLDER;

    #[test]
    fn party_hides_optional_lines() {
        let data = FormData::new().with("kiracıTC", "12345678901");
        let section = party("KİRACI", &Slots::new(&data), "kiracıAd", "kiracıTC", "kiracıAdres");

        assert_eq!(
            section.blocks,
            vec![
                Block::labeled("Ad Soyad", PLACEHOLDER),
                Block::labeled("TC", "12345678901"),
            ]
        );
    }

    #[test]
    fn standard_catalog_registers_cleanly() {
        let mut registry = TemplateRegistry::new();
        register_all(&mut registry).expect("catalog is consistent");
        assert_eq!(registry.len(), 11 + 26 + SIMPLE_CATALOG.len());
    }
}
