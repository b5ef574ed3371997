use chrono::{DateTime, TimeDelta, Utc};
use rand::{Rng, distr::weighted, seq::IndexedRandom};

pub const TIMESTAMP_FORMAT: &str = "%d/%b/%Y:%H:%M:%S +0000";

/// Largest age of a generated entry, in seconds before the run start.
pub const MAX_AGE_SECS: i64 = 900;

const BYTES: std::ops::RangeInclusive<u64> = 500..=5000;

const URLS: [&str; 11] = [
    "/home",
    "/about",
    "/contact",
    "/api/v1/users",
    "/images/logo.png",
    "/style.css",
    "/main.js",
    "/products",
    "/services",
    "/login",
    "/logout",
];
const USERS: [&str; 8] = [
    "james", "mary", "john", "patricia", "robert", "jennifer", "michael", "linda",
];
pub const STATUS: [(u16, u32); 9] = [
    (200, 50),
    (301, 5),
    (302, 5),
    (400, 5),
    (401, 3),
    (403, 2),
    (404, 5),
    (500, 23),
    (503, 2),
];

pub fn generate_ip<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!(
        "{}.{}.{}.{}",
        rng.random_range(1..=255u8),
        rng.random_range(0..=255u8),
        rng.random_range(0..=255u8),
        rng.random_range(0..=255u8)
    )
}

/// Weighted pick from [`STATUS`].
pub fn choose_status<R: Rng + ?Sized>(rng: &mut R) -> Result<u16, weighted::Error> {
    STATUS.choose_weighted(rng, |(_, w)| *w).map(|(status, _)| *status)
}

/// Builds one access-log line (without the trailing newline). `now` is the
/// run start; the entry is dated up to [`MAX_AGE_SECS`] before it.
pub fn generate_access_log<R: Rng + ?Sized>(
    rng: &mut R,
    now: DateTime<Utc>,
) -> Result<String, weighted::Error> {
    let offset = TimeDelta::seconds(rng.random_range(0..=MAX_AGE_SECS));
    let timestamp = (now - offset).format(TIMESTAMP_FORMAT);
    let ip = generate_ip(rng);
    let user = USERS.choose(rng).copied().unwrap_or("-");
    let url = URLS.choose(rng).copied().unwrap_or("/");
    let status = choose_status(rng)?;
    let bytes = rng.random_range(BYTES);

    Ok(format!(
        "{ip} user-identifier {user} [{timestamp}] \"GET {url} HTTP/1.0\" {status} {bytes}"
    ))
}
