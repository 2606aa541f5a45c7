use url::{Host, Url};

/// Проверка, что строка является абсолютным URL с одной из разрешённых схем.
///
/// Разбор делает `url::Url`; дополнительно требуются явный `scheme://`,
/// отсутствие пробелов и непустой хост с корректными метками домена.
pub fn is_url(value: &str, schemes: &[String]) -> bool {
    if value.is_empty() || value.chars().any(char::is_whitespace) {
        return false;
    }

    let Ok(url) = Url::parse(value) else {
        return false;
    };
    if !schemes.iter().any(|s| s.eq_ignore_ascii_case(url.scheme())) {
        return false;
    }
    // `https:example.com` парсер дополняет до `https://example.com/`
    let prefix_len = url.scheme().len() + 3;
    match value.get(..prefix_len) {
        Some(prefix) if prefix.eq_ignore_ascii_case(&format!("{}://", url.scheme())) => {}
        _ => return false,
    }

    match url.host() {
        Some(Host::Domain(domain)) => is_valid_domain(domain),
        Some(Host::Ipv4(_)) | Some(Host::Ipv6(_)) => true,
        None => false,
    }
}

fn is_valid_domain(domain: &str) -> bool {
    !domain.is_empty()
        && domain
            .split('.')
            .all(|label| !label.is_empty() && !label.starts_with('-') && !label.ends_with('-'))
}
