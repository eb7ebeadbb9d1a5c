//! Fixed option lists for the variant entry form.

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;

/// Continent with its 1000 Genomes super-population code and member countries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Continent {
    pub name: &'static str,
    pub code: &'static str,
    pub countries: &'static [&'static str],
}

pub static CONTINENTS: [Continent; 5] = [
    Continent {
        name: "África",
        code: "AFR",
        countries: &["Nigeria", "Ghana", "Kenia", "Etiopía", "Sudáfrica"],
    },
    Continent {
        name: "Asia",
        code: "EAS",
        countries: &["China", "Japón", "India", "Tailandia", "Vietnam", "Filipinas", "Indonesia", "Malasia"],
    },
    Continent {
        name: "Europa",
        code: "EUR",
        countries: &[
            "España",
            "Francia",
            "Italia",
            "Alemania",
            "Reino Unido",
            "Polonia",
            "Suecia",
            "Noruega",
            "Finlandia",
            "Dinamarca",
            "Bélgica",
            "Holanda",
            "Suiza",
            "Austria",
            "Grecia",
            "Portugal",
            "Irlanda",
            "Hungría",
        ],
    },
    Continent {
        name: "América",
        code: "AMR",
        countries: &[
            "México",
            "Estados Unidos",
            "Canadá",
            "Brasil",
            "Argentina",
            "Colombia",
            "Perú",
            "Chile",
            "Venezuela",
            "Ecuador",
        ],
    },
    Continent {
        name: "Oceanía",
        code: "OCE",
        countries: &["Australia", "Nueva Zelanda", "Fiji", "Papúa Nueva Guinea", "Samoa"],
    },
];

/// Country name to population code.
pub const COUNTRY_CODES: [(&str, &str); 46] = [
    ("España", "IBS"),
    ("Francia", "FRE"),
    ("Italia", "TSI"),
    ("Alemania", "GER"),
    ("Reino Unido", "GBR"),
    ("Polonia", "POL"),
    ("Suecia", "SWE"),
    ("Noruega", "NOR"),
    ("Finlandia", "FIN"),
    ("Dinamarca", "DEN"),
    ("Bélgica", "BEL"),
    ("Holanda", "HOL"),
    ("Suiza", "SUI"),
    ("Austria", "AUT"),
    ("Grecia", "GRE"),
    ("Portugal", "POR"),
    ("Irlanda", "IRE"),
    ("Hungría", "HUN"),
    ("China", "CHI"),
    ("Japón", "JPN"),
    ("India", "IND"),
    ("Tailandia", "THA"),
    ("Vietnam", "VIE"),
    ("Filipinas", "PHI"),
    ("Indonesia", "IDN"),
    ("Malasia", "MAL"),
    ("México", "MEX"),
    ("Estados Unidos", "USA"),
    ("Canadá", "CAN"),
    ("Brasil", "BRA"),
    ("Argentina", "ARG"),
    ("Colombia", "COL"),
    ("Perú", "PER"),
    ("Chile", "CHL"),
    ("Venezuela", "VEN"),
    ("Ecuador", "ECU"),
    ("Nigeria", "NIG"),
    ("Ghana", "GHA"),
    ("Kenia", "KEN"),
    ("Etiopía", "ETH"),
    ("Sudáfrica", "RSA"),
    ("Australia", "AUS"),
    ("Nueva Zelanda", "NZL"),
    ("Fiji", "FIJ"),
    ("Papúa Nueva Guinea", "PNG"),
    ("Samoa", "SAM"),
];

/// Free-text escape hatch offered by every source/evidence select.
pub const OTHER: &str = "Otra";

pub const DATABASE_SOURCES: [&str; 5] = ["dbSNP", "GWAS Catalog", "ClinVar", "SNPedia", OTHER];
pub const ANCESTRY_SOURCES: [&str; 4] = ["gnomAD", "1000 Genomes", "SNPedia", OTHER];
pub const EVIDENCE_TYPES: [&str; 4] = ["Clínico", "GWAS", "Experimental", OTHER];

/// `(value, label)` pairs for the variant category select.
pub const CATEGORIES: [(&str, &str); 5] = [
    ("rasgos", "Rasgos"),
    ("biometrica", "Biométrica"),
    ("enfermedades", "Enfermedades"),
    ("biomarcadores", "Biomarcadores"),
    ("farmacogenetica", "Farmacogenética"),
];

pub const RISK_LEVELS: [&str; 4] = ["Bajo", "Intermedio", "Alto", "N/A"];

#[must_use]
pub fn continent(name: &str) -> Option<&'static Continent> {
    CONTINENTS.iter().find(|c| c.name == name)
}

#[must_use]
pub fn continent_code(name: &str) -> Option<&'static str> {
    continent(name).map(|c| c.code)
}

#[must_use]
pub fn country_code(name: &str) -> Option<&'static str> {
    COUNTRY_CODES.iter().find(|(country, _)| *country == name).map(|(_, code)| *code)
}

/// Countries selectable for `continent`; empty when it is unknown.
#[must_use]
pub fn countries_for(continent_name: &str) -> &'static [&'static str] {
    continent(continent_name).map_or(&[], |c| c.countries)
}
