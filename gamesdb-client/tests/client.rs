use std::cell::RefCell;

use gamesdb_client::{Game, GamesDbClient, GamesDbError, Settings, Transport, Url};

/// Returns a canned body and records every URL requested.
struct FakeTransport {
    body: &'static str,
    requests: RefCell<Vec<String>>,
}

impl FakeTransport {
    fn new(body: &'static str) -> Self {
        Self {
            body,
            requests: RefCell::new(Vec::new()),
        }
    }

    fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl Transport for FakeTransport {
    fn get(&self, url: &Url) -> Result<Vec<u8>, GamesDbError> {
        self.requests.borrow_mut().push(url.to_string());
        Ok(self.body.as_bytes().to_vec())
    }
}

/// Always fails as if the server were down.
struct DownTransport;

impl Transport for DownTransport {
    fn get(&self, url: &Url) -> Result<Vec<u8>, GamesDbError> {
        Err(GamesDbError::HttpStatus {
            status: 503,
            url: url.to_string(),
        })
    }
}

fn client(transport: &FakeTransport) -> GamesDbClient<&FakeTransport> {
    GamesDbClient::with_transport(transport, &Settings::default()).unwrap()
}

const GAME_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" ?>
<Data>
    <baseImgUrl>http://thegamesdb.net/banners/</baseImgUrl>
    <Game>
        <id>2</id>
        <GameTitle>Crysis</GameTitle>
        <PlatformId>1</PlatformId>
        <Platform>PC</Platform>
        <ReleaseDate>11/13/2007</ReleaseDate>
        <ESRB>M - Mature</ESRB>
        <Genres><genre>Shooter</genre></Genres>
        <Players>4+</Players>
        <Co-op>No</Co-op>
        <Publisher>Electronic Arts</Publisher>
        <Developer>Crytek</Developer>
        <Rating>8.1111</Rating>
        <Similar>
            <SimilarCount>1</SimilarCount>
            <Game><id>15246</id><PlatformId>15</PlatformId></Game>
        </Similar>
        <Images>
            <fanart>
                <original width="1920" height="1080">fanart/original/2-1.jpg</original>
                <thumb>fanart/thumb/2-1.jpg</thumb>
            </fanart>
            <boxart side="back" width="1525" height="2162" thumb="boxart/thumb/original/back/2-1.jpg">boxart/original/back/2-1.jpg</boxart>
            <boxart side="front" width="1525" height="2160">boxart/original/front/2-1.jpg</boxart>
            <banner width="760" height="140">graphical/2-g2.jpg</banner>
            <screenshot>
                <original width="1920" height="1080">screenshots/2-1.jpg</original>
                <thumb>screenshots/thumb/2-1.jpg</thumb>
            </screenshot>
            <clearlogo width="400" height="95">clearlogo/2.png</clearlogo>
        </Images>
    </Game>
</Data>"#;

// -- validation: no network access --

#[test]
fn test_games_list_without_filters_makes_no_request() {
    let transport = FakeTransport::new("<Data/>");
    let result = client(&transport).get_games_list("", "", "");
    assert!(matches!(result, Err(GamesDbError::Validation(_))));
    assert!(transport.requests().is_empty());
}

#[test]
fn test_get_game_without_id_or_name_makes_no_request() {
    let transport = FakeTransport::new(GAME_XML);
    let result = client(&transport).get_game(0, "", "Crysis", "PC");
    assert!(matches!(result, Err(GamesDbError::Validation(_))));
    assert!(transport.requests().is_empty());
}

#[test]
fn test_id_operations_reject_zero() {
    let transport = FakeTransport::new("<Data/>");
    let c = client(&transport);
    assert!(matches!(c.get_art(0), Err(GamesDbError::Validation(_))));
    assert!(matches!(c.get_platform(0), Err(GamesDbError::Validation(_))));
    assert!(matches!(c.get_platform_games(0), Err(GamesDbError::Validation(_))));
    assert!(transport.requests().is_empty());
}

#[test]
fn test_user_rating_validation() {
    let transport = FakeTransport::new("<Data/>");
    let c = client(&transport);
    assert!(matches!(
        c.get_user_rating(0, "58536D31278176DA"),
        Err(GamesDbError::Validation(_))
    ));
    assert!(matches!(c.get_user_rating(1, ""), Err(GamesDbError::Validation(_))));
    assert!(matches!(c.get_user_favourites(""), Err(GamesDbError::Validation(_))));
    assert!(transport.requests().is_empty());
}

// -- operations --

#[test]
fn test_get_games_list() {
    let transport = FakeTransport::new(
        r#"<Data>
    <Game><id>3</id><GameTitle>Crash Bandicoot</GameTitle><ReleaseDate>09/09/1996</ReleaseDate><Platform>Sony Playstation</Platform></Game>
    <Game><id>4</id><GameTitle>Crash Bandicoot 2: Cortex Strikes Back</GameTitle><ReleaseDate>10/31/1997</ReleaseDate><Platform>Sony Playstation</Platform></Game>
    <Game><id>5</id><GameTitle>Crash Bandicoot: Warped</GameTitle><ReleaseDate>1998</ReleaseDate><Platform>Sony Playstation</Platform></Game>
</Data>"#,
    );
    let games = client(&transport)
        .get_games_list("Crash Bandicoot", "Sony PlayStation", "Adventure")
        .unwrap();
    assert_eq!(games.len(), 3);
    assert_eq!(games[2].title, "Crash Bandicoot: Warped");
    assert_eq!(
        transport.requests(),
        vec!["http://thegamesdb.net/api/GetGamesList.php?name=Crash+Bandicoot&platform=Sony+PlayStation&genre=Adventure"]
    );
}

#[test]
fn test_get_game() {
    let transport = FakeTransport::new(GAME_XML);
    let game = client(&transport).get_game(2, "Crysis", "Crysis", "PC").unwrap();
    assert_eq!(game.title, "Crysis");
    assert_eq!(game.id, 2);
    assert_eq!(game.similar.len(), 1);
    assert_eq!(
        transport.requests(),
        vec!["http://thegamesdb.net/api/GetGame.php?id=2&name=Crysis&exactname=Crysis&platform=PC"]
    );
}

#[test]
fn test_get_game_images_are_absolute() {
    const BASE: &str = "http://thegamesdb.net/banners/";
    let transport = FakeTransport::new(GAME_XML);
    let images = client(&transport).get_game(2, "", "", "").unwrap().images;

    assert_eq!(images.fan_art[0].url, format!("{BASE}fanart/original/2-1.jpg"));
    assert_eq!(images.fan_art[0].thumbnail, format!("{BASE}fanart/thumb/2-1.jpg"));
    assert_eq!(
        images.box_art[0].thumbnail,
        format!("{BASE}boxart/thumb/original/back/2-1.jpg")
    );
    // Front box art had no thumbnail and must not become the bare base
    assert_eq!(images.box_art[1].thumbnail, "");
    assert_eq!(images.banners[0].url, format!("{BASE}graphical/2-g2.jpg"));
    assert_eq!(images.screenshots[0].thumbnail, format!("{BASE}screenshots/thumb/2-1.jpg"));
    assert_eq!(images.clear_logos[0].url, format!("{BASE}clearlogo/2.png"));
}

#[test]
fn test_get_art() {
    let transport = FakeTransport::new(
        r#"<Data>
    <baseImgUrl>http://thegamesdb.net/banners/</baseImgUrl>
    <Images>
        <fanart>
            <original width="1920" height="1080">fanart/original/2-1.jpg</original>
            <thumb>fanart/thumb/2-1.jpg</thumb>
        </fanart>
    </Images>
</Data>"#,
    );
    let images = client(&transport).get_art(2).unwrap();
    assert_eq!(images.fan_art.len(), 1);
    assert_eq!(
        images.fan_art[0].url,
        "http://thegamesdb.net/banners/fanart/original/2-1.jpg"
    );
    assert_eq!(transport.requests(), vec!["http://thegamesdb.net/api/GetArt.php?id=2"]);
}

#[test]
fn test_get_platforms_list() {
    let transport = FakeTransport::new(
        r#"<Data>
    <basePlatformUrl>http://thegamesdb.net/platform/</basePlatformUrl>
    <Platforms>
        <Platform><id>25</id><name>3DO</name><alias>3do</alias></Platform>
        <Platform><id>15</id><name>Microsoft Xbox 360</name><alias>microsoft-xbox-360</alias></Platform>
    </Platforms>
</Data>"#,
    );
    let platforms = client(&transport).get_platforms_list().unwrap();
    assert_eq!(platforms.len(), 2);
    assert_eq!(platforms[0].name, "3DO");
    assert_eq!(
        transport.requests(),
        vec!["http://thegamesdb.net/api/GetPlatformsList.php"]
    );
}

#[test]
fn test_get_platform() {
    let transport = FakeTransport::new(
        r#"<Data>
    <baseImgUrl>http://thegamesdb.net/banners/</baseImgUrl>
    <Platform>
        <id>15</id>
        <Platform>Microsoft Xbox 360</Platform>
        <overview>The Xbox 360 is the second video game console produced by Microsoft.</overview>
        <developer>Microsoft</developer>
        <manufacturer>Microsoft</manufacturer>
        <maxcontrollers>4</maxcontrollers>
        <Rating>7.6111</Rating>
        <Images>
            <banner width="760" height="140">platform/banners/15-1.jpg</banner>
        </Images>
    </Platform>
</Data>"#,
    );
    let platform = client(&transport).get_platform(15).unwrap();
    assert_eq!(platform.name, "Microsoft Xbox 360");
    assert_eq!(platform.manufacturer, "Microsoft");
    assert_eq!(
        platform.images.banners[0].url,
        "http://thegamesdb.net/banners/platform/banners/15-1.jpg"
    );
    assert_eq!(
        transport.requests(),
        vec!["http://thegamesdb.net/api/GetPlatform.php?id=15"]
    );
}

#[test]
fn test_get_platform_games() {
    let transport = FakeTransport::new(
        "<Data><Game><id>1</id><GameTitle>Halo: Combat Evolved</GameTitle><ReleaseDate>11/15/2001</ReleaseDate></Game></Data>",
    );
    let games = client(&transport).get_platform_games(1).unwrap();
    assert_eq!(games.len(), 1);
    assert_eq!(
        transport.requests(),
        vec!["http://thegamesdb.net/api/GetPlatformGames.php?platform=1"]
    );
}

#[test]
fn test_get_updates_returns_placeholders() {
    // Compatibility: the update feed only carries ids and no follow-up
    // lookups are made, so every other field stays at its zero value.
    let transport = FakeTransport::new("<Items><Time>2000000</Time><Game>17</Game><Game>23</Game></Items>");
    let games = client(&transport).get_updates(2000000).unwrap();
    assert_eq!(games.iter().map(|g| g.id).collect::<Vec<_>>(), vec![17, 23]);
    for game in &games {
        assert_eq!(*game, Game::placeholder(game.id));
    }
    assert_eq!(
        transport.requests(),
        vec!["http://thegamesdb.net/api/Updates.php?time=2000000"]
    );
}

#[test]
fn test_get_updates_since_zero_is_allowed() {
    let transport = FakeTransport::new("<Items><Time>0</Time></Items>");
    assert!(client(&transport).get_updates(0).unwrap().is_empty());
    assert_eq!(transport.requests().len(), 1);
}

#[test]
fn test_get_user_rating() {
    let transport = FakeTransport::new("<Data><game><Rating>9</Rating></game></Data>");
    let rating = client(&transport).get_user_rating(1, "58536D31278176DA").unwrap();
    assert!(rating >= 0.0);
    assert_eq!(rating, 9.0);
    assert_eq!(
        transport.requests(),
        vec!["http://thegamesdb.net/api/User_Rating.php?itemid=1&accountid=58536D31278176DA"]
    );
}

#[test]
fn test_get_user_favourites_returns_placeholders() {
    // Compatibility: same id-only asymmetry as the update feed.
    let transport = FakeTransport::new("<Favorites><Game>2</Game></Favorites>");
    let games = client(&transport).get_user_favourites("58536D31278176DA").unwrap();
    assert_eq!(games, vec![Game::placeholder(2)]);
}

// -- error propagation --

#[test]
fn test_transport_error_is_propagated() {
    let c = GamesDbClient::with_transport(DownTransport, &Settings::default()).unwrap();
    match c.get_platforms_list() {
        Err(GamesDbError::HttpStatus { status, url }) => {
            assert_eq!(status, 503);
            assert!(url.ends_with("GetPlatformsList.php"));
        }
        other => panic!("expected HttpStatus, got {other:?}"),
    }
}

#[test]
fn test_malformed_body_is_decode_error() {
    let transport = FakeTransport::new("<Data><Game><id>1</id>");
    assert!(matches!(
        client(&transport).get_platform_games(1),
        Err(GamesDbError::Decode(_))
    ));
}

#[test]
fn test_bad_release_date_is_date_error_when_strict() {
    let transport = FakeTransport::new("<Data><Game><id>1</id><ReleaseDate>Spring 2004</ReleaseDate></Game></Data>");
    assert!(matches!(
        client(&transport).get_platform_games(1),
        Err(GamesDbError::Date(_))
    ));
}

#[test]
fn test_bad_release_date_dropped_when_lenient() {
    let transport = FakeTransport::new("<Data><Game><id>1</id><ReleaseDate>Spring 2004</ReleaseDate></Game></Data>");
    let settings = Settings {
        strict_dates: false,
        ..Default::default()
    };
    let c = GamesDbClient::with_transport(&transport, &settings).unwrap();
    let games = c.get_platform_games(1).unwrap();
    assert_eq!(games[0].release_date, None);
}

#[test]
fn test_custom_base_url() {
    let transport = FakeTransport::new("<Data/>");
    let settings = Settings {
        base_url: "http://localhost:8080/api/".to_string(),
        ..Default::default()
    };
    let c = GamesDbClient::with_transport(&transport, &settings).unwrap();
    c.get_platforms_list().unwrap();
    assert_eq!(
        transport.requests(),
        vec!["http://localhost:8080/api/GetPlatformsList.php"]
    );
}

#[test]
fn test_base_url_without_trailing_slash_keeps_last_segment() {
    let transport = FakeTransport::new("<Data/>");
    let settings = Settings {
        base_url: "http://localhost:8080/api".to_string(),
        ..Default::default()
    };
    let c = GamesDbClient::with_transport(&transport, &settings).unwrap();
    assert_eq!(c.base_url().as_str(), "http://localhost:8080/api/");

    c.get_platforms_list().unwrap();
    c.get_art(2).unwrap();
    assert_eq!(
        transport.requests(),
        vec![
            "http://localhost:8080/api/GetPlatformsList.php",
            "http://localhost:8080/api/GetArt.php?id=2",
        ]
    );
}

#[test]
fn test_base_url_accessor_keeps_trailing_slash() {
    let c = GamesDbClient::with_transport(DownTransport, &Settings::default()).unwrap();
    assert_eq!(c.base_url().as_str(), "http://thegamesdb.net/api/");
}

#[test]
fn test_non_hierarchical_base_url_is_config_error() {
    let settings = Settings {
        base_url: "mailto:games@example.com".to_string(),
        ..Default::default()
    };
    assert!(matches!(
        GamesDbClient::with_transport(DownTransport, &settings),
        Err(GamesDbError::Config(_))
    ));
}

#[test]
fn test_invalid_base_url_is_config_error() {
    let settings = Settings {
        base_url: "not a url".to_string(),
        ..Default::default()
    };
    assert!(matches!(
        GamesDbClient::with_transport(DownTransport, &settings),
        Err(GamesDbError::Config(_))
    ));
}
