/// Derive a human-readable site name from a host
///
/// Drops a leading `www`-style label (`www`, `www2`, `wwwqa`...), collapses
/// the first `.co.` second-level suffix, removes the TLD and joins what is
/// left with spaces: `www.nytimes.com` -> `nytimes`, `bbc.co.uk` -> `bbc`,
/// `news.bbc.co.uk` -> `news bbc`. A bare single-label host yields `""`.
pub fn provider_from_host(host: &str) -> String {
    let host = strip_www_label(host);
    let host = host.replacen(".co.", ".", 1);

    let labels: Vec<&str> = host.split('.').collect();
    labels[..labels.len() - 1].join(" ")
}

fn strip_www_label(host: &str) -> &str {
    match host.split_once('.') {
        Some((label, rest))
            if label.starts_with("www") && label.chars().all(|c| c.is_ascii_alphanumeric()) =>
        {
            rest
        }
        _ => host,
    }
}
