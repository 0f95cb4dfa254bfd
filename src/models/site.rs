//! Información pública de la empresa (sitio de marketing)

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Office {
    pub city: &'static str,
    pub country: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct CompanyProfile {
    pub name: &'static str,
    pub tagline: &'static str,
    pub contact_email: &'static str,
    pub offices: Vec<Office>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ServiceOffering {
    pub slug: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
}

pub fn company_profile() -> CompanyProfile {
    CompanyProfile {
        name: "AcceleFreight",
        tagline: "Freight forwarding, simplified.",
        contact_email: "enquiries@accelefreight.com",
        offices: vec![
            Office {
                city: "Kuala Lumpur",
                country: "Malaysia",
            },
            Office {
                city: "Penang",
                country: "Malaysia",
            },
        ],
    }
}

pub fn service_offerings() -> Vec<ServiceOffering> {
    vec![
        ServiceOffering {
            slug: "sea-freight",
            title: "Sea Freight",
            summary: "FCL and LCL ocean shipments with transhipment planning.",
        },
        ServiceOffering {
            slug: "air-freight",
            title: "Air Freight",
            summary: "Time-critical cargo on scheduled and charter capacity.",
        },
        ServiceOffering {
            slug: "customs-brokerage",
            title: "Customs Brokerage",
            summary: "Import and export declarations handled end to end.",
        },
        ServiceOffering {
            slug: "inland-haulage",
            title: "Inland Haulage",
            summary: "Port-to-door trucking for containers and loose cargo.",
        },
    ]
}
