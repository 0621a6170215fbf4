use once_cell::sync::Lazy;

use super::Lookup;

/// Catch-all for shades missing from [`COLOR_SYNONYMS`].
pub const OTHER_COLOR: &str = "Прочие";

/// Lowercased shade name → canonical hue.
pub static COLOR_SYNONYMS: Lazy<Lookup> = Lazy::new(|| {
    Lookup::from([
        ("белый", "Белый"),
        ("снежная королева", "Белый"),
        ("жемчужно-белый", "Белый"),
        ("бело-серый", "Белый"),
        ("черный", "Черный"),
        ("черный металлик", "Черный"),
        ("черный с фиолетовым отливом", "Черный"),
        ("серый", "Серый"),
        ("темно-серый", "Серый"),
        ("графит", "Серый"),
        ("мокрый асфальт", "Серый"),
        ("синий", "Синий"),
        ("темно-синий", "Синий"),
        ("ярко-синий", "Синий"),
        ("сине-зеленый", "Синий"),
        ("зеленый", "Зеленый"),
        ("лайм", "Зеленый"),
        ("изумрудный", "Зеленый"),
        ("оливковый", "Зеленый"),
        ("красный", "Красный"),
        ("бордовый", "Красный"),
        ("вишневый", "Красный"),
        ("коралл", "Красный"),
        ("желтый", "Желтый"),
        ("лимонный", "Желтый"),
        ("светло-желтый", "Желтый"),
        ("коричневый", "Коричневый"),
        ("мокко", "Коричневый"),
        ("шоколадный", "Коричневый"),
        ("фиолетовый", "Фиолетовый"),
        ("сиреневый", "Фиолетовый"),
        ("лиловый", "Фиолетовый"),
    ])
});
