use once_cell::sync::Lazy;

use super::Lookup;

/// Region assigned to cities missing from [`CITY_REGIONS`].
pub const UNKNOWN_REGION: &str = "Unknown";

/// Base city name → administrative region.
pub static CITY_REGIONS: Lazy<Lookup> = Lazy::new(|| {
    Lookup::from([
        ("Алматы", "Алматинская область"),
        ("Нур-Султан", "Астана"),
        ("Актобе", "Актюбинская область"),
        ("Петропавловск", "Северо-Казахстанская область"),
        ("Кокшетау", "Акмолинская область"),
        ("Костанай", "Костанайская область"),
        ("Павлодар", "Павлодарская область"),
        ("Караганда", "Карагандинская область"),
        ("Семей", "Восточно-Казахстанская область"),
        ("Актау", "Мангистауская область"),
        ("Атырау", "Атырауская область"),
        ("Уральск", "Западно-Казахстанская область"),
        ("Талдыкорган", "Алматинская область"),
        ("Шымкент", "Туркестанская область"),
        ("Кызылорда", "Кызылординская область"),
        ("Тараз", "Жамбылская область"),
        ("Усть-Каменогорск", "Восточно-Казахстанская область"),
        ("Рудный", "Костанайская область"),
        ("Темиртау", "Карагандинская область"),
        ("Есик", "Алматинская область"),
        ("Атбасар", "Акмолинская область"),
        ("Жаксы", "Акмолинская область"),
        ("Есиль", "Северо-Казахстанская область"),
        ("Красный Яр", "Актюбинская область"),
        ("Мариновка", "Костанайская область"),
        ("Запорожье", "Костанайская область"),
        ("Новоалександровка", "Костанайская область"),
        ("Балкашино", "Акмолинская область"),
        ("Лозовое", "Костанайская область"),
        ("Талгар", "Алматинская область"),
        ("Есенгельды", "Алматинская область"),
        ("Новокиенка", "Костанайская область"),
        ("Борисовка", "Северо-Казахстанская область"),
        ("Аршалы", "Акмолинская область"),
        ("Максимовка", "Акмолинская область"),
        ("Боралдай", "Алматинская область"),
        ("Покровка", "Актюбинская область"),
        ("Октябрьское", "Актюбинская область"),
        ("Садовое", "Северо-Казахстанская область"),
        ("Тимашевка", "Костанайская область"),
    ])
});
