pub(crate) const ENTRIES: &[(&str, &str)] = &[
    ("in", ":time içinde"),
    ("ago", ":time önce"),
    ("from_now", ":time sonra"),
    ("just_now", "Şu anda"),
    ("and", "ve"),
    ("almost", "neredeyse :time"),
    ("after", ":time sonra"),
    ("before", ":time önce"),
    ("year", "1 yıl|:count yıl"),
    ("month", "1 ay|:count ay"),
    ("week", "1 hafta|:count hafta"),
    ("day", "1 gün|:count gün"),
    ("hour", "1 saat|:count saat"),
    ("minute", "1 dakika|:count dakika"),
    ("second", "1 saniye|:count saniye"),
    ("january", "Ocak"),
    ("february", "Şubat"),
    ("march", "Mart"),
    ("april", "Nisan"),
    ("may", "Mayıs"),
    ("june", "Haziran"),
    ("july", "Temmuz"),
    ("august", "Ağustos"),
    ("september", "Eylül"),
    ("october", "Ekim"),
    ("november", "Kasım"),
    ("december", "Aralık"),
    ("monday", "Pazartesi"),
    ("tuesday", "Salı"),
    ("wednesday", "Çarşamba"),
    ("thursday", "Perşembe"),
    ("friday", "Cuma"),
    ("saturday", "Cumartesi"),
    ("sunday", "Pazar"),
];
