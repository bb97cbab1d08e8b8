use crate::{
    fare::{CalculationMethod, FareCalculation},
    network::Language,
};

/// Above this many stops a ride counts as long.
const LONG_RIDE_STOPS: u32 = 5;

/// Part of the day that changes what riders should expect on board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayPeriod {
    MorningRush,
    Afternoon,
    EveningRush,
}

impl DayPeriod {
    pub fn from_hour(hour: u32) -> Option<Self> {
        match hour {
            7..=9 => Some(Self::MorningRush),
            12..=14 => Some(Self::Afternoon),
            17..=19 => Some(Self::EveningRush),
            _ => None,
        }
    }
}

/// Advice for one ride, in display order.
pub fn journey_tips(
    language: Language,
    fare: Option<&FareCalculation>,
    currency_symbol: &str,
    hour: u32,
) -> Vec<String> {
    let text = Texts::for_language(language);
    let mut tips: Vec<String> = text.opening.iter().map(|tip| tip.to_string()).collect();

    if let Some(fare) = fare {
        if fare.calculation_method == CalculationMethod::Geo {
            tips.push((text.distance)(fare.distance_km));
        }
        tips.push((text.fare)(currency_symbol, fare.fare_amount));
        if fare.distance_stops > LONG_RIDE_STOPS {
            tips.push(text.long_ride.to_string());
        }
    }

    match DayPeriod::from_hour(hour) {
        Some(DayPeriod::MorningRush) => tips.push(text.morning.to_string()),
        Some(DayPeriod::EveningRush) => tips.push(text.evening.to_string()),
        Some(DayPeriod::Afternoon) => tips.push(text.afternoon.to_string()),
        None => {}
    }

    tips.extend(text.closing.iter().map(|tip| tip.to_string()));
    tips
}

struct Texts {
    opening: [&'static str; 3],
    distance: fn(f64) -> String,
    fare: fn(&str, u32) -> String,
    long_ride: &'static str,
    morning: &'static str,
    evening: &'static str,
    afternoon: &'static str,
    closing: [&'static str; 2],
}

impl Texts {
    fn for_language(language: Language) -> &'static Self {
        match language {
            Language::English => &ENGLISH,
            Language::Hindi => &HINDI,
        }
    }
}

static ENGLISH: Texts = Texts {
    opening: [
        "Ask the conductor about the fare before boarding",
        "Leave a bit early during rush hours",
        "Keep your belongings close to you at all times",
    ],
    distance: |km| format!("This route is approximately {km} km long"),
    fare: |symbol, amount| format!("Estimated fare is {symbol}{amount}"),
    long_ride: "This is a longer route, try to find a comfortable seat",
    morning: "Morning hours - expect office-going crowd",
    evening: "Evening hours - expect homeward-bound crowd",
    afternoon: "Afternoon hours - buses are usually less crowded",
    closing: [
        "Check the bus number at the stop before boarding",
        "Ask the conductor or driver if you need any help",
    ],
};

static HINDI: Texts = Texts {
    opening: [
        "बस में चढ़ने से पहले कंडक्टर से किराया पूछ लें",
        "भीड़ के समय में थोड़ा जल्दी निकलें",
        "अपना सामान हमेशा अपने पास रखें",
    ],
    distance: |km| format!("यह रूट लगभग {km} किमी का है"),
    fare: |symbol, amount| format!("लगभग किराया {symbol}{amount} है"),
    long_ride: "यह एक लंबा रूट है, आराम से बैठने की जगह ढूंढें",
    morning: "सुबह का समय है, ऑफिस जाने वालों की भीड़ हो सकती है",
    evening: "शाम का समय है, घर जाने वालों की भीड़ हो सकती है",
    afternoon: "दोपहर का समय है, बसें कम भीड़ में मिलेंगी",
    closing: [
        "बस स्टॉप पर बस का नंबर चेक करके ही चढ़ें",
        "अगर कोई समस्या हो तो कंडक्टर या ड्राइवर से पूछें",
    ],
};
