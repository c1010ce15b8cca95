//! Static chrome for the generated dashboard pages.
//!
//! These constants are the verbatim page shell: the head with the
//! stylesheet and script includes the deployed site serves alongside the
//! pages, the inline localization table the windguru widget script reads
//! at render time, and the shared body furniture (surface chart image,
//! action buttons, footer scripts). Page assembly concatenates them with
//! the per-site fragments; nothing in here is templated.

/// Document head and opening `<body>`.
pub const PAGE_HEAD: &str = r#"
<!DOCTYPE html>
  <html lang="en">
    <head>
      <meta charset="utf-8"/>
	<title>Surf Forecast</title>
	<link rel="stylesheet" href="/css/wgstyle.min.css"/>
	<link rel="stylesheet" href="/css/style.css"/>
	<link rel="icon" href="/images/favicon.ico"/>
	<script src="/js/jquery.min.js"></script>
	<script src="/js/forecasts.min.js"></script>
	<script src="/js/wg_user_colors_json.js"></script>
	<!-- <script src="/js/jquery-scrolltofixed-min.js"></script> -->
	<script>
	    //<![CDATA[
var WgLang = {"legend":{"SMER":"Wind direction","TMP":"Temperature","WINDSPD":"Wind speed","MWINDSPD":"Modif. wind","APCP":"Rain (mm\/3h)","TCDC":"Cloud cover (%)","HTSGW":"Wave","WAVESMER":"Wave direction","RATING":"Windguru rating","PERPW":"Wave period (s)","APCP1":"Rain (mm\/1h)","GUST":"Wind gusts","SLP":"<span class=\"helpinfhpa\">*Pressure (hPa)<\/span>","RH":"Humidity (%)","FLHGT":"<span class=\"helpinffl\">*0\u00b0 isotherm (m)<\/span>","CDC":"Cloud cover (%)<br\/>high \/ mid \/ low","TMPE":"<span class=\"helpinftmp\">*Temperature <\/span>","WCHILL":"Wind chill","APCPs":"<span class=\"helpinfsnow\">*Precip. (mm\/3h)<\/span>","APCP1s":"<span class=\"helpinfsnow\">*Precip. (mm\/1h)<\/span>","WVHGT":"Wind wave","WVPER":"Wind wave per.(s)","WVDIR":"Wind wave dir.","SWELL1":"Swell","SWPER1":"Swell period (s)","SWDIR1":"Swell direction","SWELL2":"2.Swell","SWPER2":"2.Swell period (s)","SWDIR2":"2.Swell dir.","DIRPW":"Wave direction","WAVEDIR":"Wave direction"},"tooltip":{"TMPE":"Temperature at 2 meters above surface adjusted to real altitude of the spot. More info in Help\/FAQ section.","SLP":"Sea level pressure in hPa, values above 1000 hPa are printed <b>as x-1000<\/b>","FLHGT":"Freezing level height in meters","sst":"Sea surface temperature based on satellite data. Valid for oceans and large lakes, more info in help\/FAQ","APCP1s":"Precipitation in milimeters. Bold blue numbers indicate snowfall.","APCPs":"Precipitation in milimeters. Bold blue numbers indicate snowfall."},"dir":["N","NNE","NE","ENE","E","ESE","SE","SSE","S","SSW","SW","WSW","W","WNW","NW","NNW"],"weekday":["Su","Mo","Tu","We","Th","Fr","Sa"],"txt":{"archive":"Archive","tides":"Tides","detail":"Detail \/ Map","link":"Link","timezone":"Timezone","help":"Help","options":"Options","choose_m":"Choose wind modification","loading":"Loading forecast...","delayed":"12 hours delayed forecast. Latest MM5\/WRF forecasts are only available to Windguru PRO subscribers. <a href='help_index.php?sec=pro'>Click for more info.<\/a>","delayed_short":"12 hours delayed forecast. Latest MM5\/WRF forecasts are only available to Windguru PRO subscribers.","custom_onlypro":"MM5\/WRF forecasts for custom spots are only available to Windguru PRO users","lastupdated":"Last updated","nextexpected":"Next update expected","timeleft":"Time left"},"tab":{"forecast":"Forecast","graph":"<img src=\"\/images\/gricon.png\" width=\"15\" height=\"10\"\/>","2d":"2D","2d_t":"Temperature (0 ... 5000 m)","2d_w":"Wind (0 ... 5000 m)","2d_t_l":"Temperature (alt ... +2000 m)","2d_w_l":"Wind (alt ... +2000 m)","map":"Map","webcams":"Webcams","reports":"Wind reports","accommodation":"Accommodation","schools":"Schools\/Rentals","shops":"Shops","other":"Other...","directory":"Links","fcst_graph":"<img src=\"\/img\/gricon.png\"\/>","more":"<span class=\"butt-txt\">More<\/span>","statistic":"Statistics","archive":"Archive"},"units":{"kmh":"km\/h","mph":"mph","ms":"m\/s","msd":"m\/s","knots":"knots","bft":"Bft","c":"&deg;C","f":"&deg;F","m":"m","ft":"ft"},"maps":{"windspd":"Wind","t2m":"Temperature","press":"Pressure","tcdc_apcp3":"Rain \/ clouds","tcdc_apcp1":"Rain \/ clouds"},"mapsi":{"windspd":"wind","t2m":"temperature","press":"pressure","tcdc_apcp3":"precipitation","tcdc_apcp1":"precipitation"},"gmap":{"link_f":"Forecast","link_a":"Archive","link_d":"Detail","link_add":"Add to favourites","link_s":"Select"},"spotmenu":{"sel_zeme":"SELECT COUNTRY","sel_spot":"SELECT SPOT","num_spot":"spots","num_reg":"regions","num_zeme":"countries","sel_all":"ALL","qs_hint":"Type spot name (min. 3 characters)"},"langdir":{"dir":"int"}};
//]]>
    </script>
  </head>
  <body>
"#;

/// Western Pacific surface analysis chart, downloaded next to the pages.
pub const JP_IMG_TAG: &str = "<img src=\"/cwm_ljp.gif\" id=\"jp_img\" alt=\"missing image\"/>\n";

/// Flip-through button overlaid on the surface chart.
pub const NEXT_BTN_TAG: &str = "<div id=\"next_btn\" class=\"next_btn\"></div>\n";

/// Dashboard action buttons.
pub const BUTTON_GROUP: &str = r#"<div class=button-grp>
<button id="upd_btn" class="custom_btn">Update Data</button>
<button id="weather_btn" class="custom_btn">Show Weather</button>
</div>"#;

/// Footer scripts and closing tags.
pub const PAGE_FOOT: &str = r#"
    <script src="/js/main.js"></script>
    <script> Main(); </script>
  </body>
</html>"#;
