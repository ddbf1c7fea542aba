//! The six-business example catalog used by the demo and the tests.

use crate::types::CatalogRecord;

pub fn example_catalog() -> Vec<CatalogRecord> {
    vec![
        CatalogRecord::new(
            "b001",
            "Sushi Nami",
            "sushi",
            "Rolls clásicos y combos accesibles. Ambiente tranquilo y opciones para llevar. \
             Ideal para una cita informal.",
            "10%",
            "Monterrey",
        ),
        CatalogRecord::new(
            "b002",
            "Barbería Norte",
            "barberia",
            "Corte de cabello y arreglo de barba, con perfiles fade y taper. \
             Atención rápida, cita por WhatsApp. Ambiente tranquilo y precios económicos.",
            "20%",
            "Monterrey",
        ),
        CatalogRecord::new(
            "b003",
            "Café Nube",
            "cafe",
            "Café de especialidad con wifi, postres caseros y mesas cómodas. \
             Perfecto para trabajar con laptop o platicar en pareja.",
            "5%",
            "San Pedro",
        ),
        CatalogRecord::new(
            "b004",
            "Tacos El Güero",
            "tacos",
            "Tacos al pastor y gringas con servicio rápido. Opciones baratas para cenar tarde.",
            "15%",
            "Guadalupe",
        ),
        CatalogRecord::new(
            "b005",
            "Spa Zen",
            "spa",
            "Masajes relajantes y faciales. Planes de pareja en un ambiente muy tranquilo. \
             Reservación por WhatsApp.",
            "30%",
            "San Pedro",
        ),
        CatalogRecord::new(
            "b006",
            "TechFix",
            "reparacion",
            "Reparación de celulares y laptops con diagnóstico rápido y garantía. \
             Precios accesibles y servicio mismo día.",
            "25%",
            "Apodaca",
        ),
    ]
}
