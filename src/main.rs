use chrono::NaiveDateTime;
use clap::{Args, Parser, Subcommand};
use color_eyre::Result;

use spotify_browse::api::{
    request::DEFAULT_LIMIT,
    response::{Categories, Featured, Paged, PagedAlbums, PagedPlaylists},
    BrowseQuery, Market, RecommendationQuery,
};
use spotify_browse::{BrowseApi, Error, Spotify};

#[derive(Parser, Debug)]
#[command(author, version, about = "Browse Spotify's featured content, categories and recommendations", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug)]
struct Page {
    /// The maximum number of items to return (1..=50)
    #[arg(short, long, default_value_t = DEFAULT_LIMIT)]
    limit: usize,

    /// The index of the first item to return
    #[arg(short, long, default_value_t = 0)]
    offset: usize,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List featured playlists
    Featured {
        /// ISO 3166-1 alpha-2 country code
        #[arg(short, long)]
        country: Option<String>,

        /// Language and country joined by an underscore, e.g. `es_MX`
        #[arg(long)]
        locale: Option<String>,

        /// The user's local time formatted as `yyyy-MM-ddTHH:mm:ss`
        #[arg(long)]
        timestamp: Option<NaiveDateTime>,

        #[command(flatten)]
        page: Page,
    },
    /// List new album releases
    NewReleases {
        /// ISO 3166-1 alpha-2 country code
        #[arg(short, long)]
        country: Option<String>,

        #[command(flatten)]
        page: Page,
    },
    /// List browse categories
    Categories {
        /// ISO 3166-1 alpha-2 country code
        #[arg(short, long)]
        country: Option<String>,

        /// Language and country joined by an underscore, e.g. `es_MX`
        #[arg(long)]
        locale: Option<String>,

        #[command(flatten)]
        page: Page,
    },
    /// Show a single browse category
    Category {
        /// The category id, e.g. `dinner`
        id: String,

        /// ISO 3166-1 alpha-2 country code
        #[arg(short, long)]
        country: Option<String>,

        /// Language and country joined by an underscore, e.g. `es_MX`
        #[arg(long)]
        locale: Option<String>,
    },
    /// List the playlists tagged with a category
    CategoryPlaylists {
        /// The category id, e.g. `dinner`
        id: String,

        /// ISO 3166-1 alpha-2 country code
        #[arg(short, long)]
        country: Option<String>,

        #[command(flatten)]
        page: Page,
    },
    /// Get track recommendations from seed artists, genres and tracks
    Recommendations {
        /// Seed artist ids, uris or links
        #[arg(long = "artist")]
        artists: Vec<String>,

        /// Seed genres, see the `genres` command
        #[arg(long = "genre")]
        genres: Vec<String>,

        /// Seed track ids, uris or links
        #[arg(long = "track")]
        tracks: Vec<String>,

        /// Tunable attribute filter such as `min_tempo=120` or `target_energy=0.8`
        #[arg(long = "attr", value_parser = parse_attribute)]
        attributes: Vec<(String, f64)>,

        /// The target size of the list of recommended tracks (1..=100)
        #[arg(short, long, default_value_t = DEFAULT_LIMIT)]
        limit: usize,

        /// Market to relink tracks for, `from_token` by default
        #[arg(short, long, conflicts_with = "no_market")]
        market: Option<String>,

        /// Leave the market out of the request
        #[arg(long)]
        no_market: bool,
    },
    /// List the genres available as recommendation seeds
    Genres,
}

fn parse_attribute(s: &str) -> std::result::Result<(String, f64), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("`{s}` is not of the form <name>=<value>"))?;
    let value = value
        .trim()
        .parse::<f64>()
        .map_err(|err| format!("`{value}` is not a number: {err}"))?;
    Ok((name.trim().to_string(), value))
}

fn browse_query(country: Option<String>, locale: Option<String>, page: Option<Page>) -> BrowseQuery {
    let mut query = BrowseQuery::new();
    query.country = country;
    query.locale = locale;
    if let Some(page) = page {
        query = query.limit(page.limit).offset(page.offset);
    }
    query
}

fn print_range<P: Paged>(page: &P) {
    let start = match page.items().is_empty() {
        true => page.offset(),
        false => page.offset() + 1,
    };
    println!(
        "({start}-{} of {})",
        page.offset() + page.items().len(),
        page.total()
    );
}

fn print_playlists(page: &PagedPlaylists) {
    for playlist in page.items.iter() {
        let owner = playlist.owner.name.as_deref().unwrap_or(playlist.owner.id.as_str());
        println!("- [{}] {} by {owner} ({} tracks)", playlist.id, playlist.name, playlist.tracks.total);
    }
    print_range(page);
}

fn print_featured_playlists(featured: &Featured<PagedPlaylists>) {
    if let Some(message) = &featured.message {
        println!("{message}");
    }
    print_playlists(&featured.page);
}

fn print_albums(featured: &Featured<PagedAlbums>) {
    if let Some(message) = &featured.message {
        println!("{message}");
    }
    for album in featured.page.items.iter() {
        let artists = album
            .artists
            .iter()
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        println!(
            "- [{}] {} by {artists} ({:?}, {:?})",
            album.id, album.name, album.album_type, album.release
        );
    }
    print_range(&featured.page);
}

fn print_categories(categories: &Categories) {
    for category in categories.items.iter() {
        println!("- [{}] {}", category.id, category.name);
    }
    print_range(categories);
}

async fn run(spotify: &Spotify, command: Commands) -> std::result::Result<(), Error> {
    match command {
        Commands::Featured { country, locale, timestamp, page } => {
            let mut query = browse_query(country, locale, Some(page));
            query.timestamp = timestamp;
            print_featured_playlists(&spotify.featured_playlists(&query).await?);
        }
        Commands::NewReleases { country, page } => {
            let query = browse_query(country, None, Some(page));
            print_albums(&spotify.new_releases(&query).await?);
        }
        Commands::Categories { country, locale, page } => {
            let query = browse_query(country, locale, Some(page));
            print_categories(&spotify.categories(&query).await?);
        }
        Commands::Category { id, country, locale } => {
            let category = spotify.category(&id, &browse_query(country, locale, None)).await?;
            println!("[{}] {}", category.id, category.name);
            println!("{}", category.href);
            for icon in category.icons.iter() {
                println!("  {}x{} {}", icon.width, icon.height, icon.url);
            }
        }
        Commands::CategoryPlaylists { id, country, page } => {
            let query = browse_query(country, None, Some(page));
            print_playlists(&spotify.category_playlists(&id, &query).await?);
        }
        Commands::Recommendations {
            artists,
            genres,
            tracks,
            attributes,
            limit,
            market,
            no_market,
        } => {
            let mut query = RecommendationQuery::new().limit(limit).attributes(attributes);
            if !artists.is_empty() {
                query = query.artists(artists);
            }
            if !genres.is_empty() {
                query = query.genres(genres);
            }
            if !tracks.is_empty() {
                query = query.tracks(tracks);
            }
            query = match (no_market, market) {
                (true, _) => query.market(None),
                (false, Some(market)) => query.market(Market::from(market.as_str())),
                (false, None) => query,
            };

            let recommendations = spotify.recommendations(&query).await?;
            for seed in recommendations.seeds.iter() {
                println!(
                    "seed {:?} {}: {} of {} tracks after filtering",
                    seed.seed_type, seed.id, seed.after_filtering_size, seed.initial_pool_size
                );
            }
            for track in recommendations.tracks.iter() {
                let artists = track
                    .artists
                    .iter()
                    .map(|a| a.name.as_str())
                    .collect::<Vec<_>>()
                    .join(", ");
                println!("- [{}] {} by {artists}", track.id, track.name);
            }
        }
        Commands::Genres => {
            for genre in spotify.recommendation_genre_seeds().await? {
                println!("{genre}");
            }
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::init();

    let cli = Cli::parse();
    let spotify = Spotify::from_env().map_err(Error::into_report)?;
    run(&spotify, cli.command).await.map_err(Error::into_report)
}
