use crate::schemes::Scheme;

// (category, name, description, link, tags)
type SchemeRow = (&'static str, &'static str, &'static str, &'static str, &'static [&'static str]);

const SCHEMES: &[SchemeRow] = &[
    (
        "Income & Credit",
        "PM-Kisan Samman Nidhi",
        "Direct income support of ₹6,000/year for all eligible farmer families.",
        "https://pmkisan.gov.in/",
        &["income", "support"],
    ),
    (
        "Income & Credit",
        "Kisan Credit Card (KCC)",
        "Low-interest credit facility for farmers to cover cultivation costs.",
        "https://www.nabard.org/",
        &["credit", "loan"],
    ),
    (
        "Crop Insurance & Risk",
        "Pradhan Mantri Fasal Bima Yojana (PMFBY)",
        "Crop insurance against natural calamities, pests, and diseases.",
        "https://pmfby.gov.in/",
        &["insurance", "crop", "risk"],
    ),
    (
        "Crop Insurance & Risk",
        "Restructured Weather Based Crop Insurance Scheme (RWBCIS)",
        "Provides insurance against adverse weather events affecting crops.",
        "https://pmfby.gov.in/",
        &["insurance", "weather", "risk"],
    ),
    (
        "Sustainable & Climate",
        "National Mission on Sustainable Agriculture (NMSA)",
        "Schemes for climate-resilient farming and sustainable practices.",
        "https://nmsa.dac.gov.in/",
        &["sustainable", "climate"],
    ),
    (
        "Irrigation & Water",
        "Pradhan Mantri Krishi Sinchai Yojana (PMKSY)",
        "Improved irrigation facilities and efficient water management.",
        "https://pmksy.gov.in/",
        &["irrigation", "water"],
    ),
    (
        "Irrigation & Water",
        "Per Drop More Crop (PDMC)",
        "Promotes micro-irrigation to save water and increase productivity.",
        "https://pmksy.gov.in/",
        &["micro", "irrigation", "water"],
    ),
    (
        "Soil & Research",
        "Soil Health Card Scheme",
        "Check soil nutrients and get advice on fertilizer use for higher yields.",
        "https://soilhealth.dac.gov.in/",
        &["soil", "fertilizer"],
    ),
    (
        "Soil & Research",
        "National Agricultural Innovation Project (NAIP)",
        "Supports research & technology development for farming.",
        "https://icar.org.in/",
        &["research", "innovation"],
    ),
    (
        "Skill & Infrastructure",
        "Pradhan Mantri Kaushal Vikas Yojana (PMKVY) – Agriculture Skill Development",
        "Training and skill development for farmers to improve agricultural practices.",
        "https://www.pmkvyofficial.org/",
        &["skill", "training", "development"],
    ),
    (
        "Skill & Infrastructure",
        "Agriculture Infrastructure Fund (AIF)",
        "Financial support for building post-harvest and farmgate infrastructure.",
        "https://agricoop.nic.in/en/Agriculture-Infrastructure-Fund",
        &["infrastructure", "funding", "agriculture"],
    ),
    (
        "Skill & Infrastructure",
        "e-NAM Expansion Scheme",
        "Improves market access and transparency for farmers through online trading.",
        "https://enam.gov.in/",
        &["market", "trade", "transparency"],
    ),
];

pub(crate) fn builtin_schemes() -> Vec<Scheme> {
    SCHEMES
        .iter()
        .map(|(category, name, description, link, tags)| Scheme {
            category: category.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            link: link.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        })
        .collect()
}
