//! HTTP fetching with fallback to synthetic data

use super::synthetic::{simulated_neo_feed, simulated_seismic_events};
use super::{parse_neo_feed, parse_seismic_feed, FeedError, NeoFeed, SeismicEvent, Sourced};
use crate::config::ApiSettings;
use crate::date::{now_millis, CalendarDate};
use rand::Rng;
use std::time::Duration;

/// Status code and body of an HTTP response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Minimal blocking GET interface
pub trait HttpTransport {
    fn get(&self, url: &str, query: &[(&str, String)]) -> Result<HttpResponse, FeedError>;
}

impl<T: HttpTransport + ?Sized> HttpTransport for Box<T> {
    fn get(&self, url: &str, query: &[(&str, String)]) -> Result<HttpResponse, FeedError> {
        (**self).get(url, query)
    }
}

/// `reqwest` blocking client
pub struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration) -> Result<Self, FeedError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;
        Ok(ReqwestTransport { client })
    }
}

impl HttpTransport for ReqwestTransport {
    fn get(&self, url: &str, query: &[(&str, String)]) -> Result<HttpResponse, FeedError> {
        let resp = self.client.get(url).query(query).send()?;
        let status = resp.status().as_u16();
        let body = resp.text()?;
        Ok(HttpResponse { status, body })
    }
}

/// Transport that never reaches the network
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineTransport;

impl HttpTransport for OfflineTransport {
    fn get(&self, _url: &str, _query: &[(&str, String)]) -> Result<HttpResponse, FeedError> {
        Err(FeedError::Offline)
    }
}

/// Fetches both dashboard feeds, substituting synthetic data on any failure
pub struct FeedClient<T: HttpTransport> {
    transport: T,
    settings: ApiSettings,
}

impl<T: HttpTransport> FeedClient<T> {
    pub fn new(transport: T, settings: ApiSettings) -> Self {
        FeedClient {
            transport,
            settings,
        }
    }

    /// Fetch the close-approach feed for the window ending `today`
    pub fn fetch_neo_feed(&self, today: CalendarDate, rng: &mut impl Rng) -> Sourced<NeoFeed> {
        match self.try_fetch_neo_feed(today) {
            Ok(feed) => {
                log::info!(
                    "Loaded live NEO feed: {} objects ({} reported)",
                    feed.object_count(),
                    feed.element_count
                );
                Sourced::live(feed, now_millis())
            }
            Err(err) => {
                log::warn!("NEO feed unavailable, using simulated data: {}", err);
                Sourced::simulated(simulated_neo_feed(today, rng), now_millis())
            }
        }
    }

    /// Fetch recent earthquakes
    pub fn fetch_seismic(&self, rng: &mut impl Rng) -> Sourced<Vec<SeismicEvent>> {
        let now = now_millis();
        match self.try_fetch_seismic() {
            Ok(events) => {
                log::info!("Loaded live seismic feed: {} events", events.len());
                Sourced::live(events, now)
            }
            Err(err) => {
                log::warn!("Seismic feed unavailable, using simulated data: {}", err);
                Sourced::simulated(simulated_seismic_events(now, rng), now)
            }
        }
    }

    /// Inclusive date window for the NEO query
    ///
    /// NeoWs rejects windows longer than seven days, so the window spans
    /// `feed_days` dates including today.
    pub fn neo_window(&self, today: CalendarDate) -> (CalendarDate, CalendarDate) {
        let span = i64::from(self.settings.feed_days.max(1)) - 1;
        (today.sub_days(span), today)
    }

    fn try_fetch_neo_feed(&self, today: CalendarDate) -> Result<NeoFeed, FeedError> {
        let (start, end) = self.neo_window(today);
        let query = [
            ("start_date", start.to_string()),
            ("end_date", end.to_string()),
            ("api_key", self.settings.nasa_api_key.clone()),
        ];
        log::debug!("GET {} {}..{}", self.settings.neo_feed_url, start, end);
        let body = self.get_ok(&self.settings.neo_feed_url, &query)?;
        parse_neo_feed(&body)
    }

    fn try_fetch_seismic(&self) -> Result<Vec<SeismicEvent>, FeedError> {
        log::debug!("GET {}", self.settings.seismic_feed_url);
        let body = self.get_ok(&self.settings.seismic_feed_url, &[])?;
        parse_seismic_feed(&body, self.settings.seismic_limit)
    }

    fn get_ok(&self, url: &str, query: &[(&str, String)]) -> Result<String, FeedError> {
        let resp = self.transport.get(url, query)?;
        if resp.status != 200 {
            return Err(FeedError::Status(resp.status));
        }
        Ok(resp.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::DataOrigin;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::cell::RefCell;

    /// Replays a fixed response and records requested URLs and queries
    struct CannedTransport {
        response: Option<HttpResponse>,
        requests: RefCell<Vec<(String, Vec<(String, String)>)>>,
    }

    impl CannedTransport {
        fn ok(body: &str) -> Self {
            CannedTransport {
                response: Some(HttpResponse {
                    status: 200,
                    body: body.to_string(),
                }),
                requests: RefCell::new(Vec::new()),
            }
        }

        fn status(status: u16) -> Self {
            CannedTransport {
                response: Some(HttpResponse {
                    status,
                    body: String::new(),
                }),
                requests: RefCell::new(Vec::new()),
            }
        }

        fn failing() -> Self {
            CannedTransport {
                response: None,
                requests: RefCell::new(Vec::new()),
            }
        }
    }

    impl HttpTransport for CannedTransport {
        fn get(&self, url: &str, query: &[(&str, String)]) -> Result<HttpResponse, FeedError> {
            self.requests.borrow_mut().push((
                url.to_string(),
                query
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.clone()))
                    .collect(),
            ));
            self.response
                .clone()
                .ok_or_else(|| FeedError::Transport("connection refused".to_string()))
        }
    }

    const NEO_BODY: &str = r#"{
        "element_count": 1,
        "near_earth_objects": {
            "2025-10-07": [{
                "id": "1",
                "name": "(2025 AA)",
                "estimated_diameter": { "meters": { "estimated_diameter_min": 40.0 } },
                "is_potentially_hazardous_asteroid": false,
                "close_approach_data": [{
                    "miss_distance": { "kilometers": "384400" },
                    "relative_velocity": { "kilometers_per_second": "11.2" }
                }]
            }]
        }
    }"#;

    #[test]
    fn test_live_neo_feed() {
        let client = FeedClient::new(CannedTransport::ok(NEO_BODY), ApiSettings::default());
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let feed = client.fetch_neo_feed(CalendarDate::new(2025, 10, 7), &mut rng);

        assert_eq!(feed.origin, DataOrigin::Live);
        assert_eq!(feed.data.object_count(), 1);

        let requests = client.transport.requests.borrow();
        let (url, query) = &requests[0];
        assert_eq!(url, "https://api.nasa.gov/neo/rest/v1/feed");
        assert!(query.contains(&("start_date".to_string(), "2025-10-01".to_string())));
        assert!(query.contains(&("end_date".to_string(), "2025-10-07".to_string())));
        assert!(query.contains(&("api_key".to_string(), "DEMO_KEY".to_string())));
    }

    #[test]
    fn test_transport_failure_falls_back() {
        let client = FeedClient::new(CannedTransport::failing(), ApiSettings::default());
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let feed = client.fetch_neo_feed(CalendarDate::new(2025, 10, 7), &mut rng);

        assert_eq!(feed.origin, DataOrigin::Simulated);
        assert_eq!(feed.data.by_date.len(), 7);
    }

    #[test]
    fn test_bad_status_falls_back() {
        let client = FeedClient::new(CannedTransport::status(429), ApiSettings::default());
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let events = client.fetch_seismic(&mut rng);
        assert_eq!(events.origin, DataOrigin::Simulated);
        assert_eq!(events.data.len(), 15);
    }

    #[test]
    fn test_malformed_body_falls_back() {
        let client = FeedClient::new(CannedTransport::ok("not json"), ApiSettings::default());
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let feed = client.fetch_neo_feed(CalendarDate::new(2025, 10, 7), &mut rng);
        assert_eq!(feed.origin, DataOrigin::Simulated);
    }

    #[test]
    fn test_live_seismic_feed() {
        let body = r#"{ "features": [ {
            "properties": { "mag": 6.1, "place": "Vanuatu", "time": 1759300000000, "sig": 572 },
            "geometry": { "coordinates": [167.2, -15.4, 35.0] }
        } ] }"#;
        let client = FeedClient::new(CannedTransport::ok(body), ApiSettings::default());
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let events = client.fetch_seismic(&mut rng);
        assert!(events.origin.is_live());
        assert_eq!(events.data[0].place, "Vanuatu");
    }

    #[test]
    fn test_offline_transport() {
        let client = FeedClient::new(OfflineTransport, ApiSettings::default());
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(
            client.fetch_neo_feed(CalendarDate::today(), &mut rng).origin,
            DataOrigin::Simulated
        );
    }

    #[test]
    fn test_window_respects_feed_days() {
        let settings = ApiSettings {
            feed_days: 3,
            ..ApiSettings::default()
        };
        let client = FeedClient::new(OfflineTransport, settings);
        let (start, end) = client.neo_window(CalendarDate::new(2025, 3, 2));
        assert_eq!(start, CalendarDate::new(2025, 2, 28));
        assert_eq!(end, CalendarDate::new(2025, 3, 2));
    }
}
