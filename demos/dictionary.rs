use anyhow::Result;
use boggle_solver::Dictionary;

const WORDFILE: &str = "wordlists/words.txt";

#[cfg(feature = "bincode")]
fn serialize_dictionary(dictionary: &Dictionary) -> Result<()> {
    // save to bin file
    dictionary.serialize_into("wordlists/words.bin")?;
    let loaded = Dictionary::deserialize_from("wordlists/words.bin")?;
    println!("{}", loaded);
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let dictionary = Dictionary::from_file(WORDFILE)?;
    println!("{}", dictionary);
    for word in &["cat", "ca", "xq", ""] {
        println!(
            "{:?}: word {}, prefix {}",
            word,
            dictionary.is_word(word),
            dictionary.is_prefix(word)
        );
    }
    #[cfg(feature = "bincode")]
    serialize_dictionary(&dictionary)?;
    Ok(())
}
