//! Grammar templates per language and direction.
//!
//! Forward templates reference vocabulary through category rules (`piece`,
//! `file`, `rank`, `side`, `action`, `suffix`) and slot rules (`capture`,
//! `castle`, `white`, ...). Those rules are not defined here; the assembler
//! generates them from an [`AliasTable`](crate::AliasTable). Inverse templates
//! define everything themselves, since notation never varies.

use chess_nlp_foundation::Language;

/// Text to notation, English.
const EN_FORWARD: &str = r##"
// Whitespace between components is optional and never reaches the output.
start      = _ full_move _

full_move  = base _ suffix
           / base
           / resign
           / outcome

base       = piece_move / pawn_move / castle_move

piece_move = piece _ departure _ action _ square
           / piece _ departure _ square
           / piece _ action _ square
           / piece _ square

// Rank words before bare files: "four" must not lose to file "f".
departure  = square / rank / file

pawn_move  = en_passant_capture
           / pawn_capture _ promotion
           / square _ promotion
           / pawn_capture
           / square

// The destination is written as if the captured pawn had moved one square.
en_passant_capture
           = from:file _ capture _ to_file:file _ dash? _ to_rank:rank _ en_passant
             { en_passant_target }

pawn_capture = file _ capture _ square
promotion  = promote _ piece
square     = file _ dash? _ rank
dash       = "-" { "" }

castle_move = castle _ side

resign     = by:color _ resigns { resignation }

outcome    = by:color _ wins { victory }
           / draw

_          = [ \t]* { "" }
"##;

/// Text to notation, German. German also names the side first: "kurze Rochade".
const DE_FORWARD: &str = r##"
start      = _ full_move _

full_move  = base _ suffix
           / base
           / resign
           / outcome

base       = piece_move / pawn_move / castle_move

piece_move = piece _ departure _ action _ square
           / piece _ departure _ square
           / piece _ action _ square
           / piece _ square

departure  = square / rank / file

pawn_move  = en_passant_capture
           / pawn_capture _ promotion
           / square _ promotion
           / pawn_capture
           / square

en_passant_capture
           = from:file _ capture _ to_file:file _ dash? _ to_rank:rank _ en_passant
             { en_passant_target }

pawn_capture = file _ capture _ square
promotion  = promote _ piece
square     = file _ dash? _ rank
dash       = "-" { "" }

castle_move = castle _ side
            / side _ castle

resign     = by:color _ resigns { resignation }

outcome    = by:color _ wins { victory }
           / draw

_          = [ \t]* { "" }
"##;

/// Notation to text, English.
const EN_INVERSE: &str = r##"
// No suffix after a result.
start      = full_move suffix { words }
           / full_move
           / outcome

full_move  = castle / piece_move / pawn_move

// Longest literal first.
castle     = "O-O-O" { "castle queenside" }
           / "O-O" { "castle kingside" }

outcome    = "1-0" { "white wins" }
           / "0-1" { "black wins" }
           / "1/2-1/2" { "draw" }

piece_move = piece departure action square { words }
           / piece action square { words }

departure  = square / file / rank
action     = capture / "" { "to" }
capture    = "x" { "captures" }

pawn_move  = file capture square promotion? { words }
           / square promotion? { words }

promotion  = promote piece { words }
promote    = "=" { "promote to" }

piece      = "K" { "king" }
           / "Q" { "queen" }
           / "R" { "rook" }
           / "B" { "bishop" }
           / "N" { "knight" }

square     = file rank
file       = [a-h]
rank       = [1-8]

suffix     = "#" { "checkmate" }
           / "+" { "check" }
"##;

/// Notation to text, German.
const DE_INVERSE: &str = r##"
start      = full_move suffix { words }
           / full_move
           / outcome

full_move  = castle / piece_move / pawn_move

castle     = "O-O-O" { "lange rochade" }
           / "O-O" { "kurze rochade" }

outcome    = "1-0" { "weiß gewinnt" }
           / "0-1" { "schwarz gewinnt" }
           / "1/2-1/2" { "remis" }

piece_move = piece departure action square { words }
           / piece action square { words }

departure  = square / file / rank
action     = capture / "" { "nach" }
capture    = "x" { "schlägt" }

pawn_move  = file capture square promotion? { words }
           / square promotion? { words }

promotion  = promote piece { words }
promote    = "=" { "umwandlung in" }

piece      = "K" { "könig" }
           / "Q" { "dame" }
           / "R" { "turm" }
           / "B" { "läufer" }
           / "N" { "springer" }

square     = file rank
file       = [a-h]
rank       = [1-8]

suffix     = "#" { "schachmatt" }
           / "+" { "schach" }
"##;

/// Returns the text-to-notation template for `language`.
#[must_use]
pub const fn forward(language: Language) -> &'static str {
    match language {
        Language::English => EN_FORWARD,
        Language::German => DE_FORWARD,
    }
}

/// Returns the notation-to-text template for `language`.
#[must_use]
pub const fn inverse(language: Language) -> &'static str {
    match language {
        Language::English => EN_INVERSE,
        Language::German => DE_INVERSE,
    }
}
