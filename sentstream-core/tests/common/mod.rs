//! Shared corpus and helpers for integration tests

#![allow(dead_code)]

use sentstream_core::Segmenter;

/// `(name, input, expected sentences)`
pub type Case = (&'static str, &'static str, &'static [&'static str]);

pub const CORPUS: &[Case] = &[
    (
        "basic sentence splitting",
        "This is a test. This is another test.",
        &["This is a test.", "This is another test."],
    ),
    (
        "em dash",
        "This is a test — yes, it is.",
        &["This is a test — yes, it is."],
    ),
    (
        "quoted speech",
        r#"She said, "Hello there. How are you?". I replied, "I'm fine.""#,
        &[
            r#"She said, "Hello there. How are you?"."#,
            r#"I replied, "I'm fine.""#,
        ],
    ),
    (
        "abbreviations",
        "Dr. Smith is here. At 10 a.m. I saw him.",
        &["Dr. Smith is here.", "At 10 a.m. I saw him."],
    ),
    (
        "abbreviations mid sentence",
        "I went to Dr. Smith this morning at 10 a.m. and said hi.",
        &["I went to Dr. Smith this morning at 10 a.m. and said hi."],
    ),
    (
        "abbreviation with possessive",
        "The Dr.'s office.",
        &["The Dr.'s office."],
    ),
    (
        "ellipses",
        "Wait... what just happened? I don't understand...",
        &["Wait... what just happened?", "I don't understand..."],
    ),
    (
        "decimals",
        "The price is $4.99. Do you want to buy it?",
        &["The price is $4.99.", "Do you want to buy it?"],
    ),
    (
        "sentences starting and ending with numbers",
        "10 people died in 2025. 20 people died in 2026.",
        &["10 people died in 2025.", "20 people died in 2026."],
    ),
    (
        "scientific notation",
        "The star is 3.2×10^4 light-years away.",
        &["The star is 3.2×10^4 light-years away."],
    ),
    (
        "multiple punctuation marks",
        "What?! Are you serious?! This is crazy...",
        &["What?!", "Are you serious?!", "This is crazy..."],
    ),
    (
        "parentheses",
        "This is an example (which is quite useful). Do you agree?",
        &["This is an example (which is quite useful).", "Do you agree?"],
    ),
    (
        "sentences inside parentheses",
        "This is an example (This is pretty cool. Another sentence). Do you agree?",
        &[
            "This is an example (This is pretty cool. Another sentence).",
            "Do you agree?",
        ],
    ),
    (
        "newlines",
        "First sentence.\nSecond sentence.\nThird sentence.",
        &["First sentence.", "Second sentence.", "Third sentence."],
    ),
    (
        "emojis",
        "I love pizza! 🍕 Do you? 😊",
        &["I love pizza!", "🍕 Do you?", "😊"],
    ),
    (
        "non-latin script",
        "これはテストです。 次の文です。",
        &["これはテストです。", "次の文です。"],
    ),
    (
        "bullet points",
        "- First point.\n- Second point.\n- Third point.",
        &["- First point.", "- Second point.", "- Third point."],
    ),
    (
        "email address",
        "My email is test@example.com. Contact me!",
        &["My email is test@example.com.", "Contact me!"],
    ),
    (
        "url",
        "Visit https://example.com. It's a great site!",
        &["Visit https://example.com.", "It's a great site!"],
    ),
    (
        "url with subdomain",
        "Visit https://test.example.com. It's a great site!",
        &["Visit https://test.example.com.", "It's a great site!"],
    ),
    (
        "surrounding spaces",
        "  This is a sentence.   Another one.  ",
        &["This is a sentence.", "Another one."],
    ),
    (
        "contractions",
        "You can't be serious. It's too late.",
        &["You can't be serious.", "It's too late."],
    ),
    (
        "title and proper nouns",
        "Mr. Johnson went to New York. He loves it there.",
        &["Mr. Johnson went to New York.", "He loves it there."],
    ),
    (
        "mixed case",
        "i am happy. Are you?",
        &["i am happy.", "Are you?"],
    ),
    (
        "missing punctuation",
        "This is a test without punctuation What should happen",
        &["This is a test without punctuation What should happen"],
    ),
    (
        "mentions and hashtags",
        "Hello @John! How's it going? #excited",
        &["Hello @John!", "How's it going?", "#excited"],
    ),
    (
        "math",
        "The result is 3.14. It's an approximation of pi.",
        &["The result is 3.14.", "It's an approximation of pi."],
    ),
    (
        "excessive punctuation",
        "Wait!!!! Are you sure??? This is insane!!! Right???",
        &["Wait!!!!", "Are you sure???", "This is insane!!!", "Right???"],
    ),
    (
        "mixed languages",
        "English sentence. 这是一句中文？ Another English sentence!",
        &["English sentence.", "这是一句中文？", "Another English sentence!"],
    ),
    (
        "punctuation and emoji",
        "What??! 🤯Wait??  Hello!",
        &["What??!", "🤯Wait??", "Hello!"],
    ),
    (
        "nested parentheses and quotes",
        r#"(This is "very (strange)" text). Right?"#,
        &[r#"(This is "very (strange)" text)."#, "Right?"],
    ),
    (
        "ellipsis after question mark",
        "Are you coming? ... I don't know.",
        &["Are you coming?", "... I don't know."],
    ),
    (
        "colon and comma",
        "What do you think: Is this the answer, or not?",
        &["What do you think: Is this the answer, or not?"],
    ),
    (
        "parentheses before question mark",
        "Did you understand (after all)?",
        &["Did you understand (after all)?"],
    ),
    (
        "repeated exclamation",
        "What a great day!!! This is amazing!!!",
        &["What a great day!!!", "This is amazing!!!"],
    ),
    (
        "short sentences with titles",
        "Dr. Lee is busy. Mr. Brown is in a meeting.",
        &["Dr. Lee is busy.", "Mr. Brown is in a meeting."],
    ),
    ("only emojis", "🍕🍔🍟🍦", &["🍕🍔🍟🍦"]),
    (
        "single quoted word",
        "The word 'apple' is red.",
        &["The word 'apple' is red."],
    ),
    (
        "email before period",
        "My email is example@domain.com. Please contact me.",
        &["My email is example@domain.com.", "Please contact me."],
    ),
    ("pipes", "This | is | a | test.", &["This | is | a | test."]),
    (
        "url with www",
        "You can find more info at https://www.website.com. It’s reliable.",
        &[
            "You can find more info at https://www.website.com.",
            "It’s reliable.",
        ],
    ),
    (
        "hashtags",
        "I love coding! #developer #javascript #testing",
        &["I love coding!", "#developer #javascript #testing"],
    ),
    (
        "currency",
        "I have $99.99 in my wallet. It's not enough.",
        &["I have $99.99 in my wallet.", "It's not enough."],
    ),
    (
        "parenthesis then question mark",
        "Are you sure (really)? I don't think so!",
        &["Are you sure (really)?", "I don't think so!"],
    ),
    (
        "parentheses and ellipsis",
        "This is a test (and it’s great)... seriously.",
        &["This is a test (and it’s great)... seriously."],
    ),
    (
        "unknown capitalized abbreviation",
        "The event is scheduled for noon PST. I’ll be there.",
        &["The event is scheduled for noon PST.", "I’ll be there."],
    ),
    (
        "phone number",
        "Call me at 555-1234. Or email me at example@domain.com.",
        &["Call me at 555-1234.", "Or email me at example@domain.com."],
    ),
    (
        "apostrophe inside quotes",
        r#"He said, "It's a test," and left."#,
        &[r#"He said, "It's a test," and left."#],
    ),
    (
        "quotation sentences",
        "\"It's not like I'm using,\" Case heard someone say, as he shouldered his way through the crowd around the door of the Chat. \"It's like my body's developed this massive drug deficiency.\"\nThis is a test.",
        &[
            "\"It's not like I'm using,\" Case heard someone say, as he shouldered his way through the crowd around the door of the Chat.",
            "\"It's like my body's developed this massive drug deficiency.\"",
            "This is a test.",
        ],
    ),
    (
        "url with query",
        "Visit https://www.example.com?query=test. It’s useful.",
        &["Visit https://www.example.com?query=test.", "It’s useful."],
    ),
    (
        "commas",
        "Hello, how are you? I'm fine, thanks.",
        &["Hello, how are you?", "I'm fine, thanks."],
    ),
    (
        "comma before and",
        "I like ice cream, and I like cake.",
        &["I like ice cream, and I like cake."],
    ),
    (
        "capitals in parentheses",
        "I went to the store (THE BIG ONE).",
        &["I went to the store (THE BIG ONE)."],
    ),
    (
        "dates",
        "The event is on January 1st. It's a new year.",
        &["The event is on January 1st.", "It's a new year."],
    ),
    (
        "file-like names",
        "Kokoro.js is powered by Transformers.js, a JavaScript library by Hugging Face.",
        &["Kokoro.js is powered by Transformers.js, a JavaScript library by Hugging Face."],
    ),
    (
        "periods that do not end sentences",
        "Pi is 3.14 i.e., a mathematical constant. J.R.R. Tolkien wrote The Lord of the Rings. Wait... what? The files are /path/to/file.txt, VIDEO.MP4 and image.jpg.",
        &[
            "Pi is 3.14 i.e., a mathematical constant.",
            "J.R.R. Tolkien wrote The Lord of the Rings.",
            "Wait... what?",
            "The files are /path/to/file.txt, VIDEO.MP4 and image.jpg.",
        ],
    ),
    (
        "long text",
        "The sky above the port was the color of television, tuned to a dead channel.\n\"It's not like I'm using,\" Case heard someone say, as he shouldered his way through the crowd around the door of the Chat. \"It's like my body's developed this massive drug deficiency.\"\nIt was a Sprawl voice and a Sprawl joke. The Chatsubo was a bar for professional expatriates; you could drink there for a week and never hear two words in Japanese.\nThese were to have an enormous impact, not only because they were associated with Constantine, but also because, as in so many other areas, the decisions taken by Constantine (or in his name) were to have great significance for centuries to come. One of the main issues was the shape that Christian churches were to take, since there was not, apparently, a tradition of monumental church buildings when Constantine decided to help the Christian church build a series of truly spectacular structures. The main form that these churches took was that of the basilica, a multipurpose rectangular structure, based ultimately on the earlier Greek stoa, which could be found in most of the great cities of the empire. Christianity, unlike classical polytheism, needed a large interior space for the celebration of its religious services, and the basilica aptly filled that need. We naturally do not know the degree to which the emperor was involved in the design of new churches, but it is tempting to connect this with the secular basilica that Constantine completed in the Roman forum (the so-called Basilica of Maxentius) and the one he probably built in Trier, in connection with his residence in the city at a time when he was still caesar.",
        &[
            "The sky above the port was the color of television, tuned to a dead channel.",
            "\"It's not like I'm using,\" Case heard someone say, as he shouldered his way through the crowd around the door of the Chat.",
            "\"It's like my body's developed this massive drug deficiency.\"",
            "It was a Sprawl voice and a Sprawl joke.",
            "The Chatsubo was a bar for professional expatriates; you could drink there for a week and never hear two words in Japanese.",
            "These were to have an enormous impact, not only because they were associated with Constantine, but also because, as in so many other areas, the decisions taken by Constantine (or in his name) were to have great significance for centuries to come.",
            "One of the main issues was the shape that Christian churches were to take, since there was not, apparently, a tradition of monumental church buildings when Constantine decided to help the Christian church build a series of truly spectacular structures.",
            "The main form that these churches took was that of the basilica, a multipurpose rectangular structure, based ultimately on the earlier Greek stoa, which could be found in most of the great cities of the empire.",
            "Christianity, unlike classical polytheism, needed a large interior space for the celebration of its religious services, and the basilica aptly filled that need.",
            "We naturally do not know the degree to which the emperor was involved in the design of new churches, but it is tempting to connect this with the secular basilica that Constantine completed in the Roman forum (the so-called Basilica of Maxentius) and the one he probably built in Trier, in connection with his residence in the city at a time when he was still caesar.",
        ],
    ),
    ("single word", "text", &["text"]),
    (
        "number with decimal",
        "Temperature is 40.2 degrees.",
        &["Temperature is 40.2 degrees."],
    ),
    (
        "same-mark quote pair",
        r#"I hear "I'm back to home." from radio."#,
        &[r#"I hear "I'm back to home." from radio."#],
    ),
    (
        "corner bracket pair",
        "彼は「ココにある。」と言った。",
        &["彼は「ココにある。」と言った。"],
    ),
    ("trailing line break", "text\n", &["text"]),
    ("double line break", "text\n\ntext", &["text", "text"]),
    ("repeated ideographic stop", "text。。text", &["text。。", "text"]),
    ("ideographic stop and line break", "text。\ntext", &["text。", "text"]),
    ("period and space", "1st text. 2nd text", &["1st text.", "2nd text"]),
    (
        "period and several spaces",
        "1st text.   2nd text",
        &["1st text.", "2nd text"],
    ),
    ("surrounding whitespace", " text. ", &["text."]),
    (
        "spaces around line break",
        "1st text. \n 2nd text",
        &["1st text.", "2nd text"],
    ),
    ("exclamation question glued", "text!?text", &["text!?", "text"]),
    ("final ideographic stop", "text。", &["text。"]),
    (
        "numbered list",
        "1. 1st text.\n2. 2nd text.\n10. 10th text.",
        &["1. 1st text.", "2. 2nd text.", "10. 10th text."],
    ),
    ("title without period end", "This is Dr. Watson", &["This is Dr. Watson"]),
    (
        "capitalized words",
        "Roses Are Red. Violets Are Blue",
        &["Roses Are Red.", "Violets Are Blue"],
    ),
    (
        "exclamation and question",
        "Hello! How are you?",
        &["Hello!", "How are you?"],
    ),
    ("single sentence", "This is a test.", &["This is a test."]),
    (
        "mr title",
        "Mr. Smith went to Washington.",
        &["Mr. Smith went to Washington."],
    ),
    (
        "words ending like titles",
        "He hit the drums. Then he hit the cymbals.",
        &["He hit the drums.", "Then he hit the cymbals."],
    ),
    ("surprise", "What a suprise?!", &["What a suprise?!"]),
    ("trailing ellipsis", "That's all folks...", &["That's all folks..."]),
    (
        "single line break",
        "First line\nSecond line",
        &["First line", "Second line"],
    ),
    (
        "single and double line breaks",
        "First line\nSecond line\n\nThird line",
        &["First line", "Second line", "Third line"],
    ),
    (
        "uppercase acronym",
        "This is UK. Not US",
        &["This is UK.", "Not US"],
    ),
    (
        "dollar amount",
        "This balloon costs $1.20",
        &["This balloon costs $1.20"],
    ),
    (
        "two sentences",
        "Hello World. My name is Jonas.",
        &["Hello World.", "My name is Jonas."],
    ),
    (
        "question then statement",
        "What is your name? My name is Jonas.",
        &["What is your name?", "My name is Jonas."],
    ),
    (
        "exclamation then statement",
        "There it is! I found it.",
        &["There it is!", "I found it."],
    ),
    (
        "middle initial",
        "My name is Jonas E. Smith.",
        &["My name is Jonas E. Smith."],
    ),
    ("page reference", "Please turn to p. 55.", &["Please turn to p. 55."]),
    (
        "lowercase company",
        "Were Jane and co. at the party?",
        &["Were Jane and co. at the party?"],
    ),
    (
        "business name",
        "They closed the deal with Pitt, Briggs & Co. at noon.",
        &["They closed the deal with Pitt, Briggs & Co. at noon."],
    ),
    (
        "mount",
        "I can see Mt. Fuji from here.",
        &["I can see Mt. Fuji from here."],
    ),
    (
        "saint and street",
        "St. Michael's Church is on 5th st. near the light.",
        &["St. Michael's Church is on 5th st. near the light."],
    ),
    ("junior possessive", "That is JFK Jr.'s book.", &["That is JFK Jr.'s book."]),
    (
        "country abbreviation",
        "I visited the U.S.A. last year.",
        &["I visited the U.S.A. last year."],
    ),
    (
        "dollar amount then sentence",
        "She has $100.00. It is in her bag.",
        &["She has $100.00.", "It is in her bag."],
    ),
    (
        "email with dots",
        "Her email is Jane.Doe@example.com. I sent her an email.",
        &["Her email is Jane.Doe@example.com.", "I sent her an email."],
    ),
    (
        "long url",
        "The site is, https://www.example.50.com/new-site/awesome_content.html. Please check it out.",
        &[
            "The site is, https://www.example.50.com/new-site/awesome_content.html.",
            "Please check it out.",
        ],
    ),
    (
        "double exclamation",
        "Hello!! Long time no see.",
        &["Hello!!", "Long time no see."],
    ),
    (
        "question exclamation",
        "Hello?! Is that you?",
        &["Hello?!", "Is that you?"],
    ),
];

/// Streamed input as it was chunked by a producer
pub const STREAMED: &[(&str, &[&str], &[&str])] = &[
    (
        "chunks splitting words and numbers",
        &[
            "I went",
            " to the",
            " store. I",
            " bought an apple for $1.",
            "99. It was",
            " a good deal.",
        ],
        &[
            "I went to the store.",
            "I bought an apple for $1.99.",
            "It was a good deal.",
        ],
    ),
    (
        "url split across chunks",
        &["Visit https://www", ".example.", "com", "?query=test."],
        &["Visit https://www.example.com?query=test."],
    ),
];

/// Push `chunks` in order, close, and collect every sentence
pub fn segment_chunks<S: AsRef<str>>(chunks: &[S]) -> Vec<String> {
    let mut segmenter = Segmenter::new();
    let mut sentences = Vec::new();
    for chunk in chunks {
        segmenter.push(chunk.as_ref()).unwrap();
        sentences.extend(segmenter.drain());
    }
    segmenter.close();
    sentences.extend(segmenter.drain());
    sentences
}

/// One chunk per char
pub fn char_chunks(text: &str) -> Vec<String> {
    text.chars().map(String::from).collect()
}

/// Split `text` at the given byte offsets, snapped to char boundaries
pub fn chunks_at(text: &str, cuts: &[usize]) -> Vec<String> {
    let mut cuts: Vec<usize> = cuts
        .iter()
        .map(|&cut| {
            let mut cut = cut.min(text.len());
            while !text.is_char_boundary(cut) {
                cut -= 1;
            }
            cut
        })
        .collect();
    cuts.sort_unstable();
    cuts.dedup();

    let mut chunks = Vec::new();
    let mut start = 0;
    for cut in cuts {
        chunks.push(text[start..cut].to_string());
        start = cut;
    }
    chunks.push(text[start..].to_string());
    chunks
}
