use crate::entities::{CabService, Coordinates};

const DEFAULT_NICKNAME: &str = "Destination";

/// Builds the URL that opens `service` with the route pre-filled.
///
/// Coordinates keep the precision they were entered with.
pub fn build_url(
    service: CabService,
    pickup: &Coordinates,
    dropoff: &Coordinates,
    label: &str,
) -> String {
    match service {
        CabService::Uber => {
            let nickname = if label.is_empty() {
                DEFAULT_NICKNAME
            } else {
                label
            };

            format!(
                "uber://?action=setPickup\
                 &pickup[latitude]={}\
                 &pickup[longitude]={}\
                 &dropoff[latitude]={}\
                 &dropoff[longitude]={}\
                 &dropoff[nickname]={}",
                pickup.latitude,
                pickup.longitude,
                dropoff.latitude,
                dropoff.longitude,
                urlencoding::encode(nickname),
            )
        }
        CabService::Ola => format!(
            "olacabs://app/launch?lat={}&lng={}&drop_lat={}&drop_lng={}",
            pickup.latitude, pickup.longitude, dropoff.latitude, dropoff.longitude,
        ),
    }
}
