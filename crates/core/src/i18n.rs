//! English/Gujarati translation table.
//!
//! Lookup is by the exact English source string. English text is its own
//! key, so only the Gujarati column is stored; a key with no Gujarati
//! entry is returned unchanged regardless of the active language.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::types::Language;

/// Gujarati translations keyed by the English source string.
static GUJARATI: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        // Header
        ("Bhikadiya Parivar", "ભિકડિયા પરિવાર"),
        ("Family Management System", "કુટુંબ વ્યવસ્થાપન સિસ્ટમ"),
        ("Admin User", "એડમિન વપરાશકર્તા"),
        ("Welcome,", "સ્વાગત છે,"),
        ("Logout", "લૉગ આઉટ"),
        // Navigation
        ("Dashboard", "ડેશબોર્ડ"),
        ("Members", "સભ્યો"),
        ("Gallery", "ગેલેરી"),
        ("Students", "વિદ્યાર્થીઓ"),
        ("Notifications", "સૂચનાઓ"),
        ("Notices", "સૂચનાઓ"),
        ("Registration", "નોંધણી"),
        // Dashboard
        ("Total Members", "કુલ સભ્યો"),
        ("Upcoming Events", "આગામી કાર્યક્રમો"),
        ("Total Donations", "કુલ દાન"),
        ("Recent Activity", "તાજેતરની પ્રવૃત્તિ"),
        ("Quick Actions", "ઝડપી ક્રિયાઓ"),
        ("Add Member", "સભ્ય ઉમેરો"),
        ("Create Event", "કાર્યક્રમ બનાવો"),
        ("Send Notice", "સૂચના મોકલો"),
        ("Upload Photos", "ફોટા અપલોડ કરો"),
        // Members
        ("Members Management", "સભ્યો વ્યવસ્થાપન"),
        ("Search members...", "સભ્યોને શોધો..."),
        ("Member", "સભ્ય"),
        ("Family", "કુટુંબ"),
        ("Location", "સ્થળ"),
        ("Status", "સ્થિતિ"),
        ("Actions", "ક્રિયાઓ"),
        ("Active", "સક્રિય"),
        ("Pending", "પેન્ડિંગ"),
        ("Members Abroad", "વિદેશમાં સભ્યો"),
        // Gallery
        ("Family Gallery", "કુટુંબ ગેલેરી"),
        ("All Years", "તમામ વર્ષ"),
        ("All Events", "તમામ કાર્યક્રમો"),
        ("Upload", "અપલોડ"),
        ("Photos", "ફોટા"),
        ("View Gallery", "ગેલેરી જુઓ"),
        // Students
        ("Student Achievements", "વિદ્યાર્થીઓની સિદ્ધિઓ"),
        ("All Standards", "તમામ ધોરણ"),
        ("Upload Marksheet", "માર્કશીટ અપલોડ કરો"),
        ("View Details", "વિગતો જુઓ"),
        // Registration
        ("Member Registration", "સભ્ય નોંધણી"),
        ("Personal Information", "વ્યક્તિગત માહિતી"),
        ("Family Information", "કુટુંબની માહિતી"),
        ("Business Information", "વ્યવસાયની માહિતી"),
        ("First Name", "પ્રથમ નામ"),
        ("Last Name", "છેલ્લું નામ"),
        ("Date of Birth", "જન્મ તારીખ"),
        ("Gender", "લિંગ"),
        ("Email Address", "ઈમેલ સરનામું"),
        ("Phone Number", "ફોન નંબર"),
        ("Father's Name", "પિતાનું નામ"),
        ("Family Branch", "કુટુંબની શાખા"),
        ("Current Address", "વર્તમાન સરનામું"),
        ("City", "શહેર"),
        ("State", "રાજ્ય"),
        ("Occupation", "વ્યવસાય"),
        ("Business Category", "વ્યવસાયની શ્રેણી"),
        ("Company/Business Name", "કંપની/વ્યવસાયનું નામ"),
        ("Submit Registration", "નોંધણી સબમિટ કરો"),
        ("Cancel", "રદ કરો"),
        // Notifications
        ("Notifications & Notices", "સૂચનાઓ અને નોટિસ"),
        ("Create Notice", "નોટિસ બનાવો"),
        ("Create New Notification", "નવી સૂચના બનાવો"),
        ("Title", "શીર્ષક"),
        ("Category", "શ્રેણી"),
        ("Description", "વર્ણન"),
        ("Target Date", "લક્ષ્ય તારીખ"),
        ("Create Notification", "સૂચના બનાવો"),
        // Auth
        ("Login", "લૉગિન"),
        ("New Registration", "નવી નોંધણી"),
        ("Password", "પાસવર્ડ"),
        ("Sign In", "સાઇન ઇન કરો"),
        // Common
        ("Role:", "ભૂમિકા:"),
        ("EN", "ગુ"),
        ("Previous", "પહેલાનું"),
        ("Next", "આગળ"),
        ("Edit", "સંપાદિત કરો"),
        ("View", "જુઓ"),
        ("Delete", "ડિલીટ કરો"),
        ("Close", "બંધ કરો"),
    ])
});

/// Translate an English source string into the active language.
///
/// Lookup is exact-match on the whole string. Unknown keys come back
/// unchanged, which makes missing translations visible in the UI instead
/// of blank.
#[must_use]
pub fn translate<'a>(language: Language, key: &'a str) -> &'a str {
    match language {
        Language::En => key,
        Language::Gu => GUJARATI.get(key).copied().unwrap_or(key),
    }
}
