pub const GREETING: &str = "Hello! I'm here to help you 24/7. Ask me about our services, pricing, or book an appointment!";

const PRICING: &str = "Our services start from ₹199 for beard styling, ₹299 for men's haircuts, ₹499 for women's haircuts. Hair spa is ₹599, facials from ₹799. Would you like detailed pricing for specific services?";
const HOURS: &str = "We're open daily from 8:00 AM to 10:00 PM. You can book appointments for any 30-minute slot during these hours. Would you like to book an appointment?";
const BOOKING: &str = "I can help you book an appointment! You can use our booking page or call us at +91 6263587072. What service are you interested in?";
const LOCATION: &str = "We're located at Bharhut Nagar, Satna, Madhya Pradesh. You can call us at +91 6263587072 for directions or any queries.";
const SERVICES: &str = "We offer hair services (cut, spa, coloring), beauty services (facials, makeup), and grooming services (massage, nail care). We also have special packages for brides and grooms. What service interests you?";
const PACKAGES: &str = "We have exclusive packages: Groom Package (₹9,999), Bride Package (₹14,999), and Monthly Care Package (₹9,999). Each includes multiple premium services. Would you like details about any specific package?";
const FALLBACK: &str = "Thank you for your message! For detailed information about our services, pricing, or to book an appointment, please call us at +91 6263587072 or visit our booking page. Our expert stylists are ready to help you!";

// First match wins.
const RULES: &[(&[&str], &str)] = &[
    (&["price", "cost", "rate"], PRICING),
    (&["timing", "open", "close"], HOURS),
    (&["book", "appointment"], BOOKING),
    (&["location", "address"], LOCATION),
    (&["service", "hair", "facial"], SERVICES),
    (&["package"], PACKAGES),
];

pub fn respond(message: &str) -> &'static str {
    let message = message.to_lowercase();
    RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| message.contains(k)))
        .map(|(_, reply)| *reply)
        .unwrap_or(FALLBACK)
}
