pub(crate) const ENTRIES: &[(&str, &str)] = &[
    ("in", "u :time"),
    ("ago", "Pre :time"),
    ("from_now", ":time od sada"),
    ("just_now", "upravo sada"),
    ("and", "i"),
    ("almost", "skoro :time"),
    ("after", "Nakon :time"),
    ("before", "Pre :time"),
    ("year", ":count godina|:count godine|:count godina"),
    ("month", ":count mesec|:count meseca|:count meseci"),
    ("week", ":count nedelja|:count nedelje|:count nedelja"),
    ("day", ":count dan|:count dana|:count dana"),
    ("hour", ":count sat|:count sata|:count sati"),
    ("minute", ":count minut|:count minuta |:count minuta"),
    ("second", ":count sekund|:count sekunde|:count sekunde"),
    ("january", "Januar"),
    ("february", "Februar"),
    ("march", "Mart"),
    ("april", "April"),
    ("may", "Maj"),
    ("june", "Jun"),
    ("july", "Jul"),
    ("august", "Avgust"),
    ("september", "Septembar"),
    ("october", "Oktobar"),
    ("november", "Novembar"),
    ("december", "Decembar"),
    ("monday", "Ponedeljak"),
    ("tuesday", "Utorak"),
    ("wednesday", "Sreda"),
    ("thursday", "Četvrtak"),
    ("friday", "Petak"),
    ("saturday", "Subota"),
    ("sunday", "Nedelja"),
];
