pub(crate) const ENTRIES: &[(&str, &str)] = &[
    ("in", "in :time"),
    ("ago", ":time ago"),
    ("from_now", ":time from now"),
    ("just_now", "just now"),
    ("and", "and"),
    ("almost", "almost :time"),
    ("after", ":time after"),
    ("before", ":time before"),
    ("year", ":count year|:count years"),
    ("month", ":count month|:count months"),
    ("week", ":count week|:count weeks"),
    ("day", ":count day|:count days"),
    ("hour", ":count hour|:count hours"),
    ("minute", ":count minute|:count minutes"),
    ("second", ":count second|:count seconds"),
    ("january", "January"),
    ("february", "February"),
    ("march", "March"),
    ("april", "April"),
    ("may", "May"),
    ("june", "June"),
    ("july", "July"),
    ("august", "August"),
    ("september", "September"),
    ("october", "October"),
    ("november", "November"),
    ("december", "December"),
    ("monday", "Monday"),
    ("tuesday", "Tuesday"),
    ("wednesday", "Wednesday"),
    ("thursday", "Thursday"),
    ("friday", "Friday"),
    ("saturday", "Saturday"),
    ("sunday", "Sunday"),
];
