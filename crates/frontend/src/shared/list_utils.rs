/// Утилиты для списков: сортировка и индикаторы в заголовках таблиц
use std::cmp::Ordering;

/// Trait для типов данных, поддерживающих сортировку
pub trait Sortable {
    /// Сравнивает два объекта по указанному полю
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Сортирует список по указанному полю
pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Индикатор сортировки для заголовка
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

pub fn get_sort_class(current_field: &str, field: &str) -> &'static str {
    if current_field == field {
        "sort-indicator sort-indicator--active"
    } else {
        "sort-indicator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row(&'static str, usize);

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "name" => self.0.cmp(other.0),
                "count" => self.1.cmp(&other.1),
                _ => Ordering::Equal,
            }
        }
    }

    #[test]
    fn test_sort_list() {
        let mut rows = vec![Row("navbar", 7), Row("footer", 6), Row("sidebar", 1)];
        sort_list(&mut rows, "name", true);
        assert_eq!(rows.iter().map(|r| r.0).collect::<Vec<_>>(), ["footer", "navbar", "sidebar"]);
        sort_list(&mut rows, "count", false);
        assert_eq!(rows.iter().map(|r| r.1).collect::<Vec<_>>(), [7, 6, 1]);
    }

    #[test]
    fn test_sort_indicator() {
        assert_eq!(get_sort_indicator("name", "name", true), " ▲");
        assert_eq!(get_sort_indicator("name", "name", false), " ▼");
        assert_eq!(get_sort_indicator("name", "items", true), " ⇅");
        assert_eq!(get_sort_class("name", "items"), "sort-indicator");
    }
}
