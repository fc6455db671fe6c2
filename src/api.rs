// Joke source module: a small blocking HTTP client for the three public
// joke APIs, plus the two joke lists bundled into the binary. It is
// intentionally small and synchronous to keep the control flow obvious.

use anyhow::{Context, Result};
use rand::Rng;
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use reqwest::StatusCode;
use serde::Deserialize;

/// The fixed set of joke categories a user can pick from the menu.
/// The first three are remote APIs; the last two are local lists.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    Official,
    Dad,
    ChuckNorris,
    Hindi,
    IndianEnglish,
}

impl Category {
    /// Header text shown above the joke once it is displayed.
    pub fn label(self) -> &'static str {
        match self {
            Category::Official => "Random Joke",
            Category::Dad => "Dad Joke",
            Category::ChuckNorris => "Chuck Norris Joke",
            Category::Hindi => "Hindi Joke",
            Category::IndianEnglish => "Indian English Joke",
        }
    }
}

/// Failure modes of a remote fetch. The local categories cannot fail.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected status: {0}")]
    Status(StatusCode),
    #[error("malformed response body: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl FetchError {
    /// The generic text shown in place of a joke when a fetch fails.
    /// A call that completed with a bad status reads differently from one
    /// that never completed or returned an unreadable body.
    pub fn fallback(&self) -> &'static str {
        match self {
            FetchError::Status(_) => "Failed to fetch joke",
            FetchError::Transport(_) | FetchError::Malformed(_) => "Error fetching joke",
        }
    }
}

/// Endpoint set for the three remote categories. The defaults are the
/// public APIs; tests swap in a local mock server.
#[derive(Clone, Debug)]
pub struct Endpoints {
    pub official: String,
    pub dad: String,
    pub chuck: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Endpoints {
            official: "https://official-joke-api.appspot.com/random_joke".into(),
            dad: "https://icanhazdadjoke.com/".into(),
            chuck: "https://api.chucknorris.io/jokes/random".into(),
        }
    }
}

/// Separator printed between a setup line and its punchline.
const PUNCHLINE_MARKER: &str = "\n=> ";

pub const HINDI_JOKES: [&str; 2] = [
    "संता: डॉक्टर साहब, मैं सो नहीं पाता।\n=> डॉक्टर: कब से?\nसंता: जब से आपने मेरी दवा का बिल भेजा है!",
    "टीचर: बताओ दुनिया का सबसे तेज जानवर कौन सा है?\n=> छात्र: चीता मैडम!\nटीचर: वेरी गुड! पर ये बताओ तुम्हें कैसे पता?\nछात्र: मैडम वो क्या है न, मेरी बीवी रोज कहती है... घर में चीता लगा के रखा है!",
];

pub const INDIAN_ENGLISH_JOKES: [&str; 2] = [
    "Why did the Indian IT guy get fired?\n=> Because he took 'work from home' too literally and started coding from Nepal!",
    "What do you call an Indian who loves telling jokes?\n=> A Pun-dit!",
];

// Response shapes for the three APIs. Only the fields we display are kept;
// a body missing one of them fails to deserialize and becomes `Malformed`.

#[derive(Deserialize, Debug)]
struct OfficialJoke {
    setup: String,
    punchline: String,
}

#[derive(Deserialize, Debug)]
struct DadJoke {
    joke: String,
}

#[derive(Deserialize, Debug)]
struct ChuckJoke {
    value: String,
}

/// Blocking client over the joke sources. Holds a reqwest client and the
/// endpoint set; cloning is cheap since reqwest clients share their pool.
#[derive(Clone)]
pub struct JokeClient {
    client: Client,
    endpoints: Endpoints,
}

impl JokeClient {
    /// Client pointed at the public joke APIs.
    pub fn new() -> Result<Self> {
        Self::with_endpoints(Endpoints::default())
    }

    /// Client pointed at an explicit endpoint set.
    pub fn with_endpoints(endpoints: Endpoints) -> Result<Self> {
        let client = Client::builder()
            .build()
            .context("Failed to build HTTP client")?;
        Ok(JokeClient { client, endpoints })
    }

    /// Fetch a joke for `category`. Never fails: remote errors are logged
    /// and replaced with a short fallback string so the menu loop keeps
    /// running.
    pub fn fetch(&self, category: Category) -> String {
        self.try_fetch(category).unwrap_or_else(|e| {
            log::error!("Error: {}", e);
            e.fallback().to_string()
        })
    }

    /// Fetch with the failure kind preserved. `fetch` is the forgiving
    /// wrapper the UI uses; tests assert on this one.
    pub fn try_fetch(&self, category: Category) -> Result<String, FetchError> {
        match category {
            Category::Official => {
                let body = self.get(&self.endpoints.official, false)?;
                let joke: OfficialJoke = serde_json::from_str(&body)?;
                Ok(format!("{}{}{}", joke.setup, PUNCHLINE_MARKER, joke.punchline))
            }
            Category::Dad => {
                // icanhazdadjoke serves HTML unless asked for JSON.
                let body = self.get(&self.endpoints.dad, true)?;
                let joke: DadJoke = serde_json::from_str(&body)?;
                Ok(joke.joke)
            }
            Category::ChuckNorris => {
                let body = self.get(&self.endpoints.chuck, false)?;
                let joke: ChuckJoke = serde_json::from_str(&body)?;
                Ok(joke.value)
            }
            Category::Hindi => Ok(pick(&HINDI_JOKES)),
            Category::IndianEnglish => Ok(pick(&INDIAN_ENGLISH_JOKES)),
        }
    }

    /// One GET, no timeout, no retry. Anything other than 200 is an error.
    fn get(&self, url: &str, json_accept: bool) -> Result<String, FetchError> {
        let mut req = self.client.get(url);
        if json_accept {
            req = req.header(ACCEPT, "application/json");
        }
        let res = req.send()?;
        if res.status() != StatusCode::OK {
            return Err(FetchError::Status(res.status()));
        }
        Ok(res.text()?)
    }
}

/// Uniform pick from one of the bundled lists.
fn pick(jokes: &[&str]) -> String {
    let mut rng = rand::thread_rng();
    jokes[rng.gen_range(0..jokes.len())].to_string()
}
