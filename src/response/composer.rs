// Canned reply composition
//
// Two reply shapes exist: a fixed crisis-safety message and a four-segment
// supportive template. Neither echoes user text back.

use crate::tone::Tone;

const CRISIS_REPLY: &str = "It sounds like you might be going through something very serious and painful right now. \
    I am not a crisis service or a substitute for professional care. \
    If you are in immediate danger or thinking about harming yourself, please contact your local emergency number right away. \
    You can also reach out to a trusted person in your life or a licensed mental health professional as soon as possible. \
    If available in your country, you may also contact a suicide prevention or mental health crisis hotline.";

/// The fixed crisis-safety message.
///
/// Invariant: this text never varies and never carries user-derived content.
/// Under crisis classification nothing the user wrote is echoed back.
pub fn crisis_reply() -> &'static str {
    CRISIS_REPLY
}

/// Compose the supportive reply for a tone.
///
/// Four segments joined by single spaces: validation (the only part that
/// varies, by tone label), normalization, coping suggestions, and a
/// professional-help nudge. No randomization: the same tone always produces
/// byte-identical output.
pub fn supportive_reply(tone: Tone) -> String {
    let validation = format!(
        "Thank you for sharing this with me. From what you wrote, it sounds like you might be feeling {}, \
         and that can be really hard to carry on your own.",
        tone.label()
    );

    let normalization = "Your feelings are valid, and many people go through moments like this. \
        Even though it may not feel like it right now, it is possible for things to become more manageable over time.";

    let coping = "For the next little while, you might try one or two small steps: \
        take a few slow, deep breaths, have a glass of water, gently stretch your body, \
        or take a short walk if that is accessible and safe for you. \
        Sometimes writing down what you are feeling or breaking big problems into smaller pieces can also help.";

    let nudge = "I am here to offer support and reflection, but I am not a therapist and I cannot provide any diagnosis. \
        If these feelings keep coming back or interfere with your daily life, \
        it could be helpful to talk with a qualified mental health professional or someone you trust in your life.";

    [validation.as_str(), normalization, coping, nudge].join(" ")
}
