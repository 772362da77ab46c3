// Thumbnail URLs on the League of Legends wiki

pub const WIKI_THUMB_BASE: &str = "https://wiki.leagueoflegends.com/en-us/images/thumb";
pub const THUMB_WIDTH_PX: u32 = 46;

/// Wiki thumbnail URL for a champion's square portrait.
///
/// The name is substituted literally (no escaping or URL-encoding) into both the
/// full-size file segment and the thumbnail filename:
/// `{base}/{name}_OriginalSquare.png/46px-{name}_OriginalSquare.png`.
pub fn champ_img_url(champion: &str) -> String {
    format!(
        "{}/{}_OriginalSquare.png/{}px-{}_OriginalSquare.png",
        WIKI_THUMB_BASE, champion, THUMB_WIDTH_PX, champion
    )
}
