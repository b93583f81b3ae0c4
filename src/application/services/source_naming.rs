use url::Url;

const MAX_NAME_LEN: usize = 100;
const DEFAULT_LABEL: &str = "General Science";

const TOPIC_KEYWORDS: &[&str] = &[
    // physics
    "mechanics",
    "waves",
    "optics",
    "electricity",
    "magnetism",
    "modern-physics",
    // chemistry
    "organic",
    "inorganic",
    "physical-chemistry",
    "periodic-table",
    // biology
    "cell-biology",
    "genetics",
    "ecology",
    "human-physiology",
    // mathematics
    "algebra",
    "geometry",
    "calculus",
    "trigonometry",
    "statistics",
];

/// Builds a filesystem-safe stem from a source URL: host (and port) without
/// `www.`, then the path with `/` replaced, limited to 100 characters.
pub fn output_name(source: &str) -> String {
    let (host, path) = match Url::parse(source) {
        Ok(url) => {
            let host = url.host_str().unwrap_or_default().replace("www.", "");
            let host = match url.port() {
                Some(port) => format!("{}:{}", host, port),
                None => host,
            };
            (host, url.path().trim_matches('/').replace('/', "_"))
        }
        Err(_) => (String::new(), source.trim_matches('/').replace('/', "_")),
    };

    format!("{}_{}", host, path)
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .take(MAX_NAME_LEN)
        .collect()
}

/// Guesses a topic from keywords in the URL, e.g. `.../class-12-optics-mcq`
/// gives `"Optics"`.
pub fn topic_from_url(source: &str) -> String {
    let lower = source.to_lowercase();

    TOPIC_KEYWORDS
        .iter()
        .find(|keyword| lower.contains(*keyword))
        .map(|keyword| title_case(&keyword.replace('-', " ")))
        .unwrap_or_else(|| DEFAULT_LABEL.to_string())
}

pub fn subject_from_url(source: &str) -> String {
    let lower = source.to_lowercase();

    let subject = if lower.contains("physics") {
        "Physics"
    } else if lower.contains("chemistry") {
        "Chemistry"
    } else if lower.contains("biology") {
        "Biology"
    } else if lower.contains("math") {
        "Mathematics"
    } else {
        DEFAULT_LABEL
    };

    subject.to_string()
}

fn title_case(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
