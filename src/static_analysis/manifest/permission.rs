//! Permission module.
//!
//! Static table of the permissions known to the classifier, in both the standard Android
//! namespace and the vendor namespace of VR headsets.

use serde::Serialize;
use std::{collections::HashMap, fmt};

use self::{
    Namespace::{Standard, Vendor},
    PermissionTier::{Dangerous, Normal, Signature, SignatureOrSystem},
};

/// Prefix of the permissions declared in the standard namespace.
pub const STANDARD_PREFIX: &str = "android.permission.";
/// Prefix of the permissions declared in the vendor namespace.
pub const VENDOR_PREFIX: &str = "com.oculus.permission.";

/// Declaration namespace of a permission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
    /// `android.permission.*`
    Standard,
    /// `com.oculus.permission.*`
    Vendor,
}

impl Namespace {
    /// Splits a declared permission into its namespace and short name.
    pub fn split(permission: &str) -> Option<(Self, &str)> {
        if let Some(short) = permission.strip_prefix(STANDARD_PREFIX) {
            Some((Standard, short))
        } else if let Some(short) = permission.strip_prefix(VENDOR_PREFIX) {
            Some((Vendor, short))
        } else {
            None
        }
    }
}

/// Risk tier of a permission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum PermissionTier {
    /// Gives access to private user data or device control.
    #[serde(rename = "dangerous")]
    Dangerous,
    /// Low risk, granted at install time.
    #[serde(rename = "normal")]
    Normal,
    /// Only granted to apps signed with the same certificate.
    #[serde(rename = "signature")]
    Signature,
    /// Only granted to system images or same-signature apps.
    #[serde(rename = "signatureOrSystem")]
    SignatureOrSystem,
    /// Not recognized by the classifier.
    #[serde(rename = "others")]
    Other,
}

impl fmt::Display for PermissionTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Dangerous => "dangerous",
            Normal => "normal",
            Signature => "signature",
            SignatureOrSystem => "signatureOrSystem",
            PermissionTier::Other => "others",
        };
        f.write_str(name)
    }
}

/// Entry of the permission table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PermissionEntry {
    namespace: Namespace,
    name: &'static str,
    tier: PermissionTier,
    label: &'static str,
    description: &'static str,
}

impl PermissionEntry {
    const fn new(
        namespace: Namespace,
        name: &'static str,
        tier: PermissionTier,
        label: &'static str,
        description: &'static str,
    ) -> Self {
        Self {
            namespace,
            name,
            tier,
            label,
            description,
        }
    }

    /// Gets the namespace the permission is usually declared in.
    pub fn namespace(&self) -> Namespace {
        self.namespace
    }

    /// Gets the short name, such as `INTERNET`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Gets the risk tier.
    pub fn tier(&self) -> PermissionTier {
        self.tier
    }

    /// Gets the label.
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Gets the description.
    pub fn description(&self) -> &'static str {
        self.description
    }
}

/// Classification of one declared permission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification<'a> {
    /// The permission is in the table.
    Known(&'static PermissionEntry),
    /// The permission is not in the table, or is declared in an unrecognized namespace. Holds the
    /// full declared name.
    Unknown(&'a str),
}

/// Lookup table over the known permissions, keyed by short name.
///
/// Short names are shared by both namespaces: `com.oculus.permission.HAND_TRACKING` and
/// `android.permission.HAND_TRACKING` resolve to the same entry.
#[derive(Debug)]
pub struct PermissionTable {
    index: HashMap<&'static str, &'static PermissionEntry>,
}

impl Default for PermissionTable {
    fn default() -> Self {
        Self {
            index: PERMISSIONS.iter().map(|entry| (entry.name, entry)).collect(),
        }
    }
}

impl PermissionTable {
    /// Looks up a short permission name.
    pub fn lookup(&self, short_name: &str) -> Option<&'static PermissionEntry> {
        self.index.get(short_name).copied()
    }

    /// Classifies a fully qualified declared permission.
    pub fn classify<'a>(&self, permission: &'a str) -> Classification<'a> {
        Namespace::split(permission)
            .and_then(|(_, short)| self.lookup(short))
            .map_or(Classification::Unknown(permission), Classification::Known)
    }

    /// Gets the number of known permissions.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

/// Every permission known to the classifier.
static PERMISSIONS: &[PermissionEntry] = &[
    PermissionEntry::new(
        Standard,
        "SEND_SMS",
        Dangerous,
        "send SMS messages",
        "Allows application to send SMS messages. Malicious applications may cost you money by sending messages without your confirmation.",
    ),
    PermissionEntry::new(
        Standard,
        "SEND_SMS_NO_CONFIRMATION",
        Dangerous,
        "send SMS messages",
        "send SMS messages via the Messaging app with no user input or confirmation",
    ),
    PermissionEntry::new(
        Standard,
        "CALL_PHONE",
        Dangerous,
        "directly call phone numbers",
        "Allows the application to call phone numbers without your intervention. Malicious applications may cause unexpected calls on your phone bill. Note that this does not allow the application to call emergency numbers.",
    ),
    PermissionEntry::new(
        Standard,
        "RECEIVE_SMS",
        Dangerous,
        "receive SMS",
        "Allows application to receive and process SMS messages. Malicious applications may monitor your messages or delete them without showing them to you.",
    ),
    PermissionEntry::new(
        Standard,
        "RECEIVE_MMS",
        Dangerous,
        "receive MMS",
        "Allows application to receive and process MMS messages. Malicious applications may monitor your messages or delete them without showing them to you.",
    ),
    PermissionEntry::new(
        Standard,
        "READ_SMS",
        Dangerous,
        "read SMS or MMS",
        "Allows application to read SMS messages stored on your phone or SIM card. Malicious applications may read your confidential messages.",
    ),
    PermissionEntry::new(
        Standard,
        "WRITE_SMS",
        Dangerous,
        "edit SMS or MMS",
        "Allows application to write to SMS messages stored on your phone or SIM card. Malicious applications may delete your messages.",
    ),
    PermissionEntry::new(
        Standard,
        "RECEIVE_WAP_PUSH",
        Dangerous,
        "receive WAP",
        "Allows application to receive and process WAP messages. Malicious applications may monitor your messages or delete them without showing them to you.",
    ),
    PermissionEntry::new(
        Standard,
        "READ_CONTACTS",
        Dangerous,
        "read contact data",
        "Allows an application to read all of the contact (address) data stored on your phone. Malicious applications can use this to send your data to other people.",
    ),
    PermissionEntry::new(
        Standard,
        "WRITE_CONTACTS",
        Dangerous,
        "write contact data",
        "Allows an application to modify the contact (address) data stored on your phone. Malicious applications can use this to erase or modify your contact data.",
    ),
    PermissionEntry::new(
        Standard,
        "READ_PROFILE",
        Dangerous,
        "read the user's personal profile data",
        "Allows an application to read the user's personal profile data.",
    ),
    PermissionEntry::new(
        Standard,
        "WRITE_PROFILE",
        Dangerous,
        "write the user's personal profile data",
        "Allows an application to write (but not read) the user's personal profile data.",
    ),
    PermissionEntry::new(
        Standard,
        "READ_SOCIAL_STREAM",
        Dangerous,
        "read from the user's social stream",
        "Allows an application to read from the user's social stream.",
    ),
    PermissionEntry::new(
        Standard,
        "WRITE_SOCIAL_STREAM",
        Dangerous,
        "write the user's social stream",
        "Allows an application to write (but not read) the user's social stream data.",
    ),
    PermissionEntry::new(
        Standard,
        "READ_CALENDAR",
        Dangerous,
        "read calendar events",
        "Allows an application to read all of the calendar events stored on your phone. Malicious applications can use this to send your calendar events to other people.",
    ),
    PermissionEntry::new(
        Standard,
        "WRITE_CALENDAR",
        Dangerous,
        "add or modify calendar events and send emails to guests",
        "Allows an application to add or change the events on your calendar, which may send emails to guests. Malicious applications can use this to erase or modify your calendar events or to send emails to guests.",
    ),
    PermissionEntry::new(
        Standard,
        "READ_USER_DICTIONARY",
        Dangerous,
        "read user-defined dictionary",
        "Allows an application to read any private words, names and phrases that the user may have stored in the user dictionary.",
    ),
    PermissionEntry::new(
        Standard,
        "WRITE_USER_DICTIONARY",
        Normal,
        "write to user-defined dictionary",
        "Allows an application to write new words into the user dictionary.",
    ),
    PermissionEntry::new(
        Standard,
        "READ_HISTORY_BOOKMARKS",
        Dangerous,
        "read Browser's history and bookmarks",
        "Allows the application to read all the URLs that the browser has visited and all of the browser's bookmarks.",
    ),
    PermissionEntry::new(
        Standard,
        "WRITE_HISTORY_BOOKMARKS",
        Dangerous,
        "write Browser's history and bookmarks",
        "Allows an application to modify the browser's history or bookmarks stored on your phone. Malicious applications can use this to erase or modify your browser's data.",
    ),
    PermissionEntry::new(
        Standard,
        "SET_ALARM",
        Normal,
        "set alarm in alarm clock",
        "Allows the application to set an alarm in an installed alarm clock application. Some alarm clock applications may not implement this feature.",
    ),
    PermissionEntry::new(
        Standard,
        "ACCESS_FINE_LOCATION",
        Dangerous,
        "fine (GPS) location",
        "Access fine location sources, such as the Global Positioning System on the phone, where available. Malicious applications can use this to determine where you are and may consume additional battery power.",
    ),
    PermissionEntry::new(
        Standard,
        "ACCESS_COARSE_LOCATION",
        Dangerous,
        "coarse (network-based) location",
        "Access coarse location sources, such as the mobile network database, to determine an approximate phone location, where available. Malicious applications can use this to determine approximately where you are.",
    ),
    PermissionEntry::new(
        Standard,
        "ACCESS_MOCK_LOCATION",
        Dangerous,
        "mock location sources for testing",
        "Create mock location sources for testing. Malicious applications can use this to override the location and/or status returned by real-location sources such as GPS or Network providers.",
    ),
    PermissionEntry::new(
        Standard,
        "ACCESS_LOCATION_EXTRA_COMMANDS",
        Normal,
        "access extra location provider commands",
        "Access extra location provider commands. Malicious applications could use this to interfere with the operation of the GPS or other location sources.",
    ),
    PermissionEntry::new(
        Standard,
        "INSTALL_LOCATION_PROVIDER",
        SignatureOrSystem,
        "permission to install a location provider",
        "Create mock location sources for testing. Malicious applications can use this to override the location and/or status returned by real-location sources such as GPS or Network providers, or monitor and report your location to an external source.",
    ),
    PermissionEntry::new(
        Standard,
        "INTERNET",
        Dangerous,
        "full Internet access",
        "Allows an application to create network sockets.",
    ),
    PermissionEntry::new(
        Standard,
        "ACCESS_NETWORK_STATE",
        Normal,
        "view network status",
        "Allows an application to view the status of all networks.",
    ),
    PermissionEntry::new(
        Standard,
        "ACCESS_WIFI_STATE",
        Normal,
        "view Wi-Fi status",
        "Allows an application to view the information about the status of Wi-Fi.",
    ),
    PermissionEntry::new(
        Standard,
        "BLUETOOTH",
        Dangerous,
        "create Bluetooth connections",
        "Allows an application to view configuration of the local Bluetooth phone and to make and accept connections with paired devices.",
    ),
    PermissionEntry::new(
        Standard,
        "NFC",
        Dangerous,
        "control Near-Field Communication",
        "Allows an application to communicate with Near-Field Communication (NFC) tags, cards and readers.",
    ),
    PermissionEntry::new(
        Standard,
        "USE_SIP",
        Dangerous,
        "make/receive Internet calls",
        "Allows an application to use the SIP service to make/receive Internet calls.",
    ),
    PermissionEntry::new(
        Standard,
        "ACCOUNT_MANAGER",
        Signature,
        "act as the Account Manager Service",
        "Allows an application to make calls to Account Authenticators",
    ),
    PermissionEntry::new(
        Standard,
        "GET_ACCOUNTS",
        Normal,
        "discover known accounts",
        "Allows an application to access the list of accounts known by the phone.",
    ),
    PermissionEntry::new(
        Standard,
        "AUTHENTICATE_ACCOUNTS",
        Dangerous,
        "act as an account authenticator",
        "Allows an application to use the account authenticator capabilities of the Account Manager, including creating accounts as well as obtaining and setting their passwords.",
    ),
    PermissionEntry::new(
        Standard,
        "USE_CREDENTIALS",
        Dangerous,
        "use the authentication credentials of an account",
        "Allows an application to request authentication tokens.",
    ),
    PermissionEntry::new(
        Standard,
        "MANAGE_ACCOUNTS",
        Dangerous,
        "manage the accounts list",
        "Allows an application to perform operations like adding and removing accounts and deleting their password.",
    ),
    PermissionEntry::new(
        Standard,
        "MODIFY_AUDIO_SETTINGS",
        Dangerous,
        "change your audio settings",
        "Allows application to modify global audio settings, such as volume and routing.",
    ),
    PermissionEntry::new(
        Standard,
        "RECORD_AUDIO",
        Dangerous,
        "record audio",
        "Allows application to access the audio record path.",
    ),
    PermissionEntry::new(
        Standard,
        "CAMERA",
        Dangerous,
        "take pictures and videos",
        "Allows application to take pictures and videos with the camera. This allows the application to collect images that the camera is seeing at any time.",
    ),
    PermissionEntry::new(
        Standard,
        "VIBRATE",
        Normal,
        "control vibrator",
        "Allows the application to control the vibrator.",
    ),
    PermissionEntry::new(
        Standard,
        "FLASHLIGHT",
        Normal,
        "control flashlight",
        "Allows the application to control the flashlight.",
    ),
    PermissionEntry::new(
        Standard,
        "ACCESS_USB",
        SignatureOrSystem,
        "access USB devices",
        "Allows the application to access USB devices.",
    ),
    PermissionEntry::new(
        Standard,
        "HARDWARE_TEST",
        Signature,
        "test hardware",
        "Allows the application to control various peripherals for the purpose of hardware testing.",
    ),
    PermissionEntry::new(
        Standard,
        "PROCESS_OUTGOING_CALLS",
        Dangerous,
        "intercept outgoing calls",
        "Allows application to process outgoing calls and change the number to be dialled. Malicious applications may monitor, redirect or prevent outgoing calls.",
    ),
    PermissionEntry::new(
        Standard,
        "MODIFY_PHONE_STATE",
        SignatureOrSystem,
        "modify phone status",
        "Allows the application to control the phone features of the device. An application with this permission can switch networks, turn the phone radio on and off and the like, without ever notifying you.",
    ),
    PermissionEntry::new(
        Standard,
        "READ_PHONE_STATE",
        Dangerous,
        "read phone state and identity",
        "Allows the application to access the phone features of the device. An application with this permission can determine the phone number and serial number of this phone, whether a call is active, the number that call is connected to and so on.",
    ),
    PermissionEntry::new(
        Standard,
        "WRITE_EXTERNAL_STORAGE",
        Dangerous,
        "read/modify/delete SD card contents",
        "Allows an application to write to the SD card.",
    ),
    PermissionEntry::new(
        Standard,
        "READ_EXTERNAL_STORAGE",
        Dangerous,
        "read SD card contents",
        "Allows an application to read from SD Card.",
    ),
    PermissionEntry::new(
        Standard,
        "WRITE_SETTINGS",
        Dangerous,
        "modify global system settings",
        "Allows an application to modify the system's settings data. Malicious applications can corrupt your system's configuration.",
    ),
    PermissionEntry::new(
        Standard,
        "WRITE_SECURE_SETTINGS",
        SignatureOrSystem,
        "modify secure system settings",
        "Allows an application to modify the system's secure settings data. Not for use by common applications.",
    ),
    PermissionEntry::new(
        Standard,
        "WRITE_GSERVICES",
        SignatureOrSystem,
        "modify the Google services map",
        "Allows an application to modify the Google services map. Not for use by common applications.",
    ),
    PermissionEntry::new(
        Standard,
        "EXPAND_STATUS_BAR",
        Normal,
        "expand/collapse status bar",
        "Allows application to expand or collapse the status bar.",
    ),
    PermissionEntry::new(
        Standard,
        "GET_TASKS",
        Dangerous,
        "retrieve running applications",
        "Allows application to retrieve information about currently and recently running tasks. May allow malicious applications to discover private information about other applications.",
    ),
    PermissionEntry::new(
        Standard,
        "REORDER_TASKS",
        Dangerous,
        "reorder applications running",
        "Allows an application to move tasks to the foreground and background. Malicious applications can force themselves to the front without your control.",
    ),
    PermissionEntry::new(
        Standard,
        "CHANGE_CONFIGURATION",
        Dangerous,
        "change your UI settings",
        "Allows an application to change the current configuration, such as the locale or overall font size.",
    ),
    PermissionEntry::new(
        Standard,
        "RESTART_PACKAGES",
        Normal,
        "kill background processes",
        "Allows an application to kill background processes of other applications, even if memory is not low.",
    ),
    PermissionEntry::new(
        Standard,
        "KILL_BACKGROUND_PROCESSES",
        Normal,
        "kill background processes",
        "Allows an application to kill background processes of other applications, even if memory is not low.",
    ),
    PermissionEntry::new(
        Standard,
        "FORCE_STOP_PACKAGES",
        Signature,
        "force-stop other applications",
        "Allows an application to stop other applications forcibly.",
    ),
    PermissionEntry::new(
        Standard,
        "DUMP",
        SignatureOrSystem,
        "retrieve system internal status",
        "Allows application to retrieve internal status of the system. Malicious applications may retrieve a wide variety of private and secure information that they should never commonly need.",
    ),
    PermissionEntry::new(
        Standard,
        "SYSTEM_ALERT_WINDOW",
        Dangerous,
        "display system-level alerts",
        "Allows an application to show system-alert windows. Malicious applications can take over the entire screen of the phone.",
    ),
    PermissionEntry::new(
        Standard,
        "SET_ANIMATION_SCALE",
        Dangerous,
        "modify global animation speed",
        "Allows an application to change the global animation speed (faster or slower animations) at any time.",
    ),
    PermissionEntry::new(
        Standard,
        "PERSISTENT_ACTIVITY",
        Dangerous,
        "make application always run",
        "Allows an application to make parts of itself persistent, so that the system can't use it for other applications.",
    ),
    PermissionEntry::new(
        Standard,
        "GET_PACKAGE_SIZE",
        Normal,
        "measure application storage space",
        "Allows an application to retrieve its code, data and cache sizes",
    ),
    PermissionEntry::new(
        Standard,
        "SET_PREFERRED_APPLICATIONS",
        Signature,
        "set preferred applications",
        "Allows an application to modify your preferred applications. This can allow malicious applications to silently change the applications that are run, spoofing your existing applications to collect private data from you.",
    ),
    PermissionEntry::new(
        Standard,
        "RECEIVE_BOOT_COMPLETED",
        Normal,
        "automatically start at boot",
        "Allows an application to start itself as soon as the system has finished booting. This can make it take longer to start the phone and allow the application to slow down the overall phone by always running.",
    ),
    PermissionEntry::new(
        Standard,
        "BROADCAST_STICKY",
        Normal,
        "send sticky broadcast",
        "Allows an application to send sticky broadcasts, which remain after the broadcast ends. Malicious applications can make the phone slow or unstable by causing it to use too much memory.",
    ),
    PermissionEntry::new(
        Standard,
        "WAKE_LOCK",
        Dangerous,
        "prevent phone from sleeping",
        "Allows an application to prevent the phone from going to sleep.",
    ),
    PermissionEntry::new(
        Standard,
        "SET_WALLPAPER",
        Normal,
        "set wallpaper",
        "Allows the application to set the system wallpaper.",
    ),
    PermissionEntry::new(
        Standard,
        "SET_WALLPAPER_HINTS",
        Normal,
        "set wallpaper size hints",
        "Allows the application to set the system wallpaper size hints.",
    ),
    PermissionEntry::new(
        Standard,
        "SET_TIME",
        SignatureOrSystem,
        "set time",
        "Allows an application to change the phone's clock time.",
    ),
    PermissionEntry::new(
        Standard,
        "SET_TIME_ZONE",
        Dangerous,
        "set time zone",
        "Allows an application to change the phone's time zone.",
    ),
    PermissionEntry::new(
        Standard,
        "MOUNT_UNMOUNT_FILESYSTEMS",
        Dangerous,
        "mount and unmount file systems",
        "Allows the application to mount and unmount file systems for removable storage.",
    ),
    PermissionEntry::new(
        Standard,
        "MOUNT_FORMAT_FILESYSTEMS",
        Dangerous,
        "format external storage",
        "Allows the application to format removable storage.",
    ),
    PermissionEntry::new(
        Standard,
        "ASEC_ACCESS",
        Signature,
        "get information on internal storage",
        "Allows the application to get information on internal storage.",
    ),
    PermissionEntry::new(
        Standard,
        "ASEC_CREATE",
        Signature,
        "create internal storage",
        "Allows the application to create internal storage.",
    ),
    PermissionEntry::new(
        Standard,
        "ASEC_DESTROY",
        Signature,
        "destroy internal storage",
        "Allows the application to destroy internal storage.",
    ),
    PermissionEntry::new(
        Standard,
        "ASEC_MOUNT_UNMOUNT",
        Signature,
        "mount/unmount internal storage",
        "Allows the application to mount/unmount internal storage.",
    ),
    PermissionEntry::new(
        Standard,
        "ASEC_RENAME",
        Signature,
        "rename internal storage",
        "Allows the application to rename internal storage.",
    ),
    PermissionEntry::new(
        Standard,
        "DISABLE_KEYGUARD",
        Dangerous,
        "disable key lock",
        "Allows an application to disable the key lock and any associated password security. A legitimate example of this is the phone disabling the key lock when receiving an incoming phone call, then re-enabling the key lock when the call is finished.",
    ),
    PermissionEntry::new(
        Standard,
        "READ_SYNC_SETTINGS",
        Normal,
        "read sync settings",
        "Allows an application to read the sync settings, such as whether sync is enabled for Contacts.",
    ),
    PermissionEntry::new(
        Standard,
        "WRITE_SYNC_SETTINGS",
        Dangerous,
        "write sync settings",
        "Allows an application to modify the sync settings, such as whether sync is enabled for Contacts.",
    ),
    PermissionEntry::new(
        Standard,
        "READ_SYNC_STATS",
        Normal,
        "read sync statistics",
        "Allows an application to read the sync stats; e.g. the history of syncs that have occurred.",
    ),
    PermissionEntry::new(
        Standard,
        "WRITE_APN_SETTINGS",
        Dangerous,
        "write Access Point Name settings",
        "Allows an application to modify the APN settings, such as Proxy and Port of any APN.",
    ),
    PermissionEntry::new(
        Standard,
        "SUBSCRIBED_FEEDS_READ",
        Normal,
        "read subscribed feeds",
        "Allows an application to receive details about the currently synced feeds.",
    ),
    PermissionEntry::new(
        Standard,
        "SUBSCRIBED_FEEDS_WRITE",
        Dangerous,
        "write subscribed feeds",
        "Allows an application to modify your currently synced feeds. This could allow a malicious application to change your synced feeds.",
    ),
    PermissionEntry::new(
        Standard,
        "CHANGE_NETWORK_STATE",
        Dangerous,
        "change network connectivity",
        "Allows an application to change the state of network connectivity.",
    ),
    PermissionEntry::new(
        Standard,
        "CHANGE_WIFI_STATE",
        Dangerous,
        "change Wi-Fi status",
        "Allows an application to connect to and disconnect from Wi-Fi access points and to make changes to configured Wi-Fi networks.",
    ),
    PermissionEntry::new(
        Standard,
        "CHANGE_WIFI_MULTICAST_STATE",
        Dangerous,
        "allow Wi-Fi Multicast reception",
        "Allows an application to receive packets not directly addressed to your device. This can be useful when discovering services offered nearby. It uses more power than the non-multicast mode.",
    ),
    PermissionEntry::new(
        Standard,
        "BLUETOOTH_ADMIN",
        Dangerous,
        "bluetooth administration",
        "Allows an application to configure the local Bluetooth phone and to discover and pair with remote devices.",
    ),
    PermissionEntry::new(
        Standard,
        "CLEAR_APP_CACHE",
        Dangerous,
        "delete all application cache data",
        "Allows an application to free phone storage by deleting files in application cache directory. Access is usually very restricted to system process.",
    ),
    PermissionEntry::new(
        Standard,
        "READ_LOGS",
        Dangerous,
        "read sensitive log data",
        "Allows an application to read from the system's various log files. This allows it to discover general information about what you are doing with the phone, potentially including personal or private information.",
    ),
    PermissionEntry::new(
        Standard,
        "SET_DEBUG_APP",
        Dangerous,
        "enable application debugging",
        "Allows an application to turn on debugging for another application. Malicious applications can use this to kill other applications.",
    ),
    PermissionEntry::new(
        Standard,
        "SET_PROCESS_LIMIT",
        Dangerous,
        "limit number of running processes",
        "Allows an application to control the maximum number of processes that will run. Never needed for common applications.",
    ),
    PermissionEntry::new(
        Standard,
        "SET_ALWAYS_FINISH",
        Dangerous,
        "make all background applications close",
        "Allows an application to control whether activities are always finished as soon as they go to the background. Never needed for common applications.",
    ),
    PermissionEntry::new(
        Standard,
        "SIGNAL_PERSISTENT_PROCESSES",
        Dangerous,
        "send Linux signals to applications",
        "Allows application to request that the supplied signal be sent to all persistent processes.",
    ),
    PermissionEntry::new(
        Standard,
        "DIAGNOSTIC",
        Signature,
        "read/write to resources owned by diag",
        "Allows an application to read and write to any resource owned by the diag group; for example, files in /dev. This could potentially affect system stability and security. This should ONLY be used for hardware-specific diagnostics by the manufacturer or operator.",
    ),
    PermissionEntry::new(
        Standard,
        "STATUS_BAR",
        SignatureOrSystem,
        "disable or modify status bar",
        "Allows application to disable the status bar or add and remove system icons.",
    ),
    PermissionEntry::new(
        Standard,
        "STATUS_BAR_SERVICE",
        Signature,
        "status bar",
        "Allows the application to be the status bar.",
    ),
    PermissionEntry::new(
        Standard,
        "FORCE_BACK",
        Signature,
        "force application to close",
        "Allows an application to force any activity that is in the foreground to close and go back. Should never be needed for common applications.",
    ),
    PermissionEntry::new(
        Standard,
        "UPDATE_DEVICE_STATS",
        SignatureOrSystem,
        "modify battery statistics",
        "Allows the modification of collected battery statistics. Not for use by common applications.",
    ),
    PermissionEntry::new(
        Standard,
        "INTERNAL_SYSTEM_WINDOW",
        Signature,
        "display unauthorised windows",
        "Allows the creation of windows that are intended to be used by the internal system user interface. Not for use by common applications.",
    ),
    PermissionEntry::new(
        Standard,
        "MANAGE_APP_TOKENS",
        Signature,
        "manage application tokens",
        "Allows applications to create and manage their own tokens, bypassing their common Z-ordering. Should never be needed for common applications.",
    ),
    PermissionEntry::new(
        Standard,
        "INJECT_EVENTS",
        Signature,
        "press keys and control buttons",
        "Allows an application to deliver its own input events (key presses, etc.) to other applications. Malicious applications can use this to take over the phone.",
    ),
    PermissionEntry::new(
        Standard,
        "SET_ACTIVITY_WATCHER",
        Signature,
        "monitor and control all application launching",
        "Allows an application to monitor and control how the system launches activities. Malicious applications may compromise the system completely. This permission is needed only for development, never for common phone usage.",
    ),
    PermissionEntry::new(
        Standard,
        "SHUTDOWN",
        Signature,
        "partial shutdown",
        "Puts the activity manager into a shut-down state. Does not perform a complete shut down.",
    ),
    PermissionEntry::new(
        Standard,
        "STOP_APP_SWITCHES",
        Signature,
        "prevent app switches",
        "Prevents the user from switching to another application.",
    ),
    PermissionEntry::new(
        Standard,
        "READ_INPUT_STATE",
        Signature,
        "record what you type and actions that you take",
        "Allows applications to watch the keys that you press even when interacting with another application (such as entering a password). Should never be needed for common applications.",
    ),
    PermissionEntry::new(
        Standard,
        "BIND_INPUT_METHOD",
        Signature,
        "bind to an input method",
        "Allows the holder to bind to the top-level interface of an input method. Should never be needed for common applications.",
    ),
    PermissionEntry::new(
        Standard,
        "BIND_WALLPAPER",
        SignatureOrSystem,
        "bind to wallpaper",
        "Allows the holder to bind to the top-level interface of wallpaper. Should never be needed for common applications.",
    ),
    PermissionEntry::new(
        Standard,
        "BIND_DEVICE_ADMIN",
        Signature,
        "interact with device admin",
        "Allows the holder to send intents to a device administrator. Should never be needed for common applications.",
    ),
    PermissionEntry::new(
        Standard,
        "SET_ORIENTATION",
        Signature,
        "change screen orientation",
        "Allows an application to change the rotation of the screen at any time. Should never be needed for common applications.",
    ),
    PermissionEntry::new(
        Standard,
        "INSTALL_PACKAGES",
        SignatureOrSystem,
        "directly install applications",
        "Allows an application to install new or updated Android packages. Malicious applications can use this to add new applications with arbitrarily powerful permissions.",
    ),
    PermissionEntry::new(
        Standard,
        "REQUEST_INSTALL_PACKAGES",
        Dangerous,
        "Allows an application to request installing packages.",
        "Malicious applications can use this to try and trick users into installing additional malicious packages.",
    ),
    PermissionEntry::new(
        Standard,
        "CLEAR_APP_USER_DATA",
        Signature,
        "delete other applications' data",
        "Allows an application to clear user data.",
    ),
    PermissionEntry::new(
        Standard,
        "DELETE_CACHE_FILES",
        SignatureOrSystem,
        "delete other applications' caches",
        "Allows an application to delete cache files.",
    ),
    PermissionEntry::new(
        Standard,
        "DELETE_PACKAGES",
        SignatureOrSystem,
        "delete applications",
        "Allows an application to delete Android packages. Malicious applications can use this to delete important applications.",
    ),
    PermissionEntry::new(
        Standard,
        "MOVE_PACKAGE",
        SignatureOrSystem,
        "Move application resources",
        "Allows an application to move application resources from internal to external media and vice versa.",
    ),
    PermissionEntry::new(
        Standard,
        "CHANGE_COMPONENT_ENABLED_STATE",
        SignatureOrSystem,
        "enable or disable application components",
        "Allows an application to change whether or not a component of another application is enabled. Malicious applications can use this to disable important phone capabilities. It is important to be careful with permission, as it is possible to bring application components into an unusable, inconsistent or unstable state.",
    ),
    PermissionEntry::new(
        Standard,
        "ACCESS_SURFACE_FLINGER",
        Signature,
        "access SurfaceFlinger",
        "Allows application to use SurfaceFlinger low-level features.",
    ),
    PermissionEntry::new(
        Standard,
        "READ_FRAME_BUFFER",
        Signature,
        "read frame buffer",
        "Allows application to read the content of the frame buffer.",
    ),
    PermissionEntry::new(
        Standard,
        "BRICK",
        Signature,
        "permanently disable phone",
        "Allows the application to disable the entire phone permanently. This is very dangerous.",
    ),
    PermissionEntry::new(
        Standard,
        "REBOOT",
        SignatureOrSystem,
        "force phone reboot",
        "Allows the application to force the phone to reboot.",
    ),
    PermissionEntry::new(
        Standard,
        "DEVICE_POWER",
        Signature,
        "turn phone on or off",
        "Allows the application to turn the phone on or off.",
    ),
    PermissionEntry::new(
        Standard,
        "FACTORY_TEST",
        Signature,
        "run in factory test mode",
        "Run as a low-level manufacturer test, allowing complete access to the phone hardware. Only available when a phone is running in manufacturer test mode.",
    ),
    PermissionEntry::new(
        Standard,
        "BROADCAST_PACKAGE_REMOVED",
        Signature,
        "send package removed broadcast",
        "Allows an application to broadcast a notification that an application package has been removed. Malicious applications may use this to kill any other application running.",
    ),
    PermissionEntry::new(
        Standard,
        "BROADCAST_SMS",
        Signature,
        "send SMS-received broadcast",
        "Allows an application to broadcast a notification that an SMS message has been received. Malicious applications may use this to forge incoming SMS messages.",
    ),
    PermissionEntry::new(
        Standard,
        "BROADCAST_WAP_PUSH",
        Signature,
        "send WAP-PUSH-received broadcast",
        "Allows an application to broadcast a notification that a WAP-PUSH message has been received. Malicious applications may use this to forge MMS message receipt or to replace the content of any web page silently with malicious variants.",
    ),
    PermissionEntry::new(
        Standard,
        "MASTER_CLEAR",
        SignatureOrSystem,
        "reset system to factory defaults",
        "Allows an application to completely reset the system to its factory settings, erasing all data, configuration and installed applications.",
    ),
    PermissionEntry::new(
        Standard,
        "CALL_PRIVILEGED",
        SignatureOrSystem,
        "directly call any phone numbers",
        "Allows the application to call any phone number, including emergency numbers, without your intervention. Malicious applications may place unnecessary and illegal calls to emergency services.",
    ),
    PermissionEntry::new(
        Standard,
        "PERFORM_CDMA_PROVISIONING",
        SignatureOrSystem,
        "directly start CDMA phone setup",
        "Allows the application to start CDMA provisioning. Malicious applications may start CDMA provisioning unnecessarily",
    ),
    PermissionEntry::new(
        Standard,
        "CONTROL_LOCATION_UPDATES",
        SignatureOrSystem,
        "control location update notifications",
        "Allows enabling/disabling location update notifications from the radio. Not for use by common applications.",
    ),
    PermissionEntry::new(
        Standard,
        "ACCESS_CHECKIN_PROPERTIES",
        SignatureOrSystem,
        "access check-in properties",
        "Allows read/write access to properties uploaded by the check-in service. Not for use by common applications.",
    ),
    PermissionEntry::new(
        Standard,
        "PACKAGE_USAGE_STATS",
        Signature,
        "update component usage statistics",
        "Allows the modification of collected component usage statistics. Not for use by common applications.",
    ),
    PermissionEntry::new(
        Standard,
        "BATTERY_STATS",
        Normal,
        "modify battery statistics",
        "Allows the modification of collected battery statistics. Not for use by common applications.",
    ),
    PermissionEntry::new(
        Standard,
        "BACKUP",
        SignatureOrSystem,
        "control system back up and restore",
        "Allows the application to control the system's back-up and restore mechanism. Not for use by common applications.",
    ),
    PermissionEntry::new(
        Standard,
        "BIND_APPWIDGET",
        SignatureOrSystem,
        "choose widgets",
        "Allows the application to tell the system which widgets can be used by which application. With this permission, applications can give access to personal data to other applications. Not for use by common applications.",
    ),
    PermissionEntry::new(
        Standard,
        "CHANGE_BACKGROUND_DATA_SETTING",
        Signature,
        "change background data usage setting",
        "Allows an application to change the background data usage setting.",
    ),
    PermissionEntry::new(
        Standard,
        "GLOBAL_SEARCH",
        SignatureOrSystem,
        "",
        "",
    ),
    PermissionEntry::new(
        Standard,
        "GLOBAL_SEARCH_CONTROL",
        Signature,
        "",
        "",
    ),
    PermissionEntry::new(
        Standard,
        "SET_WALLPAPER_COMPONENT",
        SignatureOrSystem,
        "",
        "",
    ),
    PermissionEntry::new(
        Standard,
        "ACCESS_CACHE_FILESYSTEM",
        SignatureOrSystem,
        "access the cache file system",
        "Allows an application to read and write the cache file system.",
    ),
    PermissionEntry::new(
        Standard,
        "COPY_PROTECTED_DATA",
        Signature,
        "Allows to invoke default container service to copy content. Not for use by common applications.",
        "Allows to invoke default container service to copy content. Not for use by common applications.",
    ),
    PermissionEntry::new(
        Standard,
        "C2D_MESSAGE",
        Signature,
        "Allows cloud to device messaging",
        "Allows the application to receive push notifications.",
    ),
    PermissionEntry::new(
        Standard,
        "RECEIVE",
        Signature,
        "C2DM permissions",
        "Permission for cloud to device messaging.",
    ),
    PermissionEntry::new(
        Standard,
        "ADD_VOICEMAIL",
        Dangerous,
        "add voicemails into the system",
        "Allows an application to add voicemails into the system.",
    ),
    PermissionEntry::new(
        Standard,
        "ACCEPT_HANDOVER",
        Dangerous,
        "",
        "Allows a calling app to continue a call which was started in another app.  An example is a video calling app that wants to continue a voice call on the user's mobile network.",
    ),
    PermissionEntry::new(
        Standard,
        "ACCESS_NOTIFICATION_POLICY",
        Normal,
        "",
        "Marker permission for applications that wish to access notification policy.",
    ),
    PermissionEntry::new(
        Standard,
        "ANSWER_PHONE_CALLS",
        Dangerous,
        "",
        "Allows the app to answer an incoming phone call.",
    ),
    PermissionEntry::new(
        Standard,
        "BIND_ACCESSIBILITY_SERVICE",
        Signature,
        "",
        "Must be required by an AccessibilityService, to ensure that only the system can bind to it.",
    ),
    PermissionEntry::new(
        Standard,
        "BIND_AUTOFILL_SERVICE",
        Signature,
        "",
        "Must be required by a AutofillService, to ensure that only the system can bind to it.",
    ),
    PermissionEntry::new(
        Standard,
        "BIND_CARRIER_MESSAGING_SERVICE",
        Normal,
        "",
        "The system process that is allowed to bind to services in carrier apps will have this permission.",
    ),
    PermissionEntry::new(
        Standard,
        "BIND_CARRIER_SERVICES",
        Signature,
        "",
        "The system process that is allowed to bind to services in carrier apps will have this permission. Carrier apps should use this permission to protect their services that only the system is allowed to bind to.",
    ),
    PermissionEntry::new(
        Standard,
        "BIND_CHOOSER_TARGET_SERVICE",
        Signature,
        "",
        "Must be required by a ChooserTargetService, to ensure that only the system can bind to it",
    ),
    PermissionEntry::new(
        Standard,
        "BIND_CONDITION_PROVIDER_SERVICE",
        Signature,
        "",
        "Must be required by a ConditionProviderService, to ensure that only the system can bind to it",
    ),
    PermissionEntry::new(
        Standard,
        "BIND_DREAM_SERVICE",
        Signature,
        "",
        "Must be required by an DreamService, to ensure that only the system can bind to it.",
    ),
    PermissionEntry::new(
        Standard,
        "BIND_INCALL_SERVICE",
        Signature,
        "",
        "Must be required by a InCallService, to ensure that only the system can bind to it.",
    ),
    PermissionEntry::new(
        Standard,
        "BIND_MIDI_DEVICE_SERVICE",
        Signature,
        "",
        "Must be required by an MidiDeviceService, to ensure that only the system can bind to it.",
    ),
    PermissionEntry::new(
        Standard,
        "BIND_NFC_SERVICE",
        Signature,
        "",
        "Must be required by a HostApduService or OffHostApduService to ensure that only the system can bind to it.",
    ),
    PermissionEntry::new(
        Standard,
        "BIND_NOTIFICATION_LISTENER_SERVICE",
        Signature,
        "",
        "Must be required by an NotificationListenerService, to ensure that only the system can bind to it.",
    ),
    PermissionEntry::new(
        Standard,
        "BIND_PRINT_SERVICE",
        Signature,
        "",
        "Must be required by a PrintService, to ensure that only the system can bind to it.",
    ),
    PermissionEntry::new(
        Standard,
        "BIND_QUICK_SETTINGS_TILE",
        Normal,
        "",
        "Allows an application to bind to third party quick settings tiles.",
    ),
    PermissionEntry::new(
        Standard,
        "BIND_REMOTEVIEWS",
        Normal,
        "",
        "Must be required by a RemoteViewsService, to ensure that only the system can bind to it.",
    ),
    PermissionEntry::new(
        Standard,
        "BIND_SCREENING_SERVICE",
        Signature,
        "",
        "Must be required by a CallScreeningService, to ensure that only the system can bind to it.",
    ),
    PermissionEntry::new(
        Standard,
        "BIND_TELECOM_CONNECTION_SERVICE",
        Signature,
        "",
        "Must be required by a ConnectionService, to ensure that only the system can bind to it.",
    ),
    PermissionEntry::new(
        Standard,
        "BIND_TEXT_SERVICE",
        Signature,
        "",
        "Must be required by a TextService (e.g. SpellCheckerService) to ensure that only the system can bind to it.",
    ),
    PermissionEntry::new(
        Standard,
        "BIND_TV_INPUT",
        Signature,
        "",
        "Must be required by a TvInputService to ensure that only the system can bind to it.",
    ),
    PermissionEntry::new(
        Standard,
        "BIND_VISUAL_VOICEMAIL_SERVICE",
        Signature,
        "",
        "Must be required by a link",
    ),
    PermissionEntry::new(
        Standard,
        "BIND_VOICE_INTERACTION",
        Signature,
        "",
        "Must be required by a VoiceInteractionService, to ensure that only the system can bind to it.",
    ),
    PermissionEntry::new(
        Standard,
        "BIND_VPN_SERVICE",
        Signature,
        "",
        "Must be required by a VpnService, to ensure that only the system can bind to it.",
    ),
    PermissionEntry::new(
        Standard,
        "BIND_VR_LISTENER_SERVICE",
        Signature,
        "",
        "Must be required by an VrListenerService, to ensure that only the system can bind to it.",
    ),
    PermissionEntry::new(
        Standard,
        "BLUETOOTH_PRIVILEGED",
        Normal,
        "",
        "Allows applications to pair bluetooth devices without user interaction, and to allow or disallow phonebook access or message access. This is not available to third party applications.",
    ),
    PermissionEntry::new(
        Standard,
        "BODY_SENSORS",
        Dangerous,
        "",
        "Allows an application to access data from sensors that the user uses to measure what is happening inside his/her body, such as heart rate.",
    ),
    PermissionEntry::new(
        Standard,
        "CAPTURE_AUDIO_OUTPUT",
        Normal,
        "",
        "Allows an application to capture audio output.",
    ),
    PermissionEntry::new(
        Standard,
        "CAPTURE_SECURE_VIDEO_OUTPUT",
        Normal,
        "",
        "Allows an application to capture secure video output.",
    ),
    PermissionEntry::new(
        Standard,
        "CAPTURE_VIDEO_OUTPUT",
        Normal,
        "",
        "Allows an application to capture video output.",
    ),
    PermissionEntry::new(
        Standard,
        "FOREGROUND_SERVICE",
        Normal,
        "",
        "Allows a regular application to use Service.startForeground",
    ),
    PermissionEntry::new(
        Standard,
        "GET_ACCOUNTS_PRIVILEGED",
        Normal,
        "",
        "Allows access to the list of accounts in the Accounts Service.",
    ),
    PermissionEntry::new(
        Standard,
        "INSTALL_SHORTCUT",
        Normal,
        "",
        "Allows an application to install a shortcut in Launcher.",
    ),
    PermissionEntry::new(
        Standard,
        "INSTANT_APP_FOREGROUND_SERVICE",
        Normal,
        "",
        "Allows an instant app to create foreground services.",
    ),
    PermissionEntry::new(
        Standard,
        "LOCATION_HARDWARE",
        Normal,
        "",
        "Allows an application to use location features in hardware, such as the geofencing api.",
    ),
    PermissionEntry::new(
        Standard,
        "MANAGE_DOCUMENTS",
        Signature,
        "",
        "Allows an application to manage access to documents, usually as part of a document picker.",
    ),
    PermissionEntry::new(
        Standard,
        "MANAGE_OWN_CALLS",
        Normal,
        "",
        "Allows a calling application which manages it own calls through the self-managed",
    ),
    PermissionEntry::new(
        Standard,
        "MEDIA_CONTENT_CONTROL",
        Normal,
        "",
        "Allows an application to know what content is playing and control its playback.",
    ),
    PermissionEntry::new(
        Standard,
        "NFC_TRANSACTION_EVENT",
        Normal,
        "",
        "Allows applications to receive NFC transaction events.",
    ),
    PermissionEntry::new(
        Standard,
        "READ_CALL_LOG",
        Dangerous,
        "",
        "Allows an application to read the user's call log.",
    ),
    PermissionEntry::new(
        Standard,
        "READ_PHONE_NUMBERS",
        Dangerous,
        "",
        "Allows read access to the device's phone number(s). This is a subset of the capabilities granted by",
    ),
    PermissionEntry::new(
        Standard,
        "READ_VOICEMAIL",
        Signature,
        "",
        "Allows an application to read voicemails in the system.",
    ),
    PermissionEntry::new(
        Standard,
        "REQUEST_COMPANION_RUN_IN_BACKGROUND",
        Normal,
        "",
        "Allows a companion app to run in the background.",
    ),
    PermissionEntry::new(
        Standard,
        "REQUEST_COMPANION_USE_DATA_IN_BACKGROUND",
        Normal,
        "",
        "Allows a companion app to use data in the background.",
    ),
    PermissionEntry::new(
        Standard,
        "REQUEST_DELETE_PACKAGES",
        Normal,
        "",
        "Allows an application to request deleting packages. Apps targeting APIs",
    ),
    PermissionEntry::new(
        Standard,
        "REQUEST_IGNORE_BATTERY_OPTIMIZATIONS",
        Normal,
        "",
        "Permission an application must hold in order to use",
    ),
    PermissionEntry::new(
        Standard,
        "SEND_RESPOND_VIA_MESSAGE",
        Normal,
        "",
        "Allows an application (Phone) to send a request to other applications to handle the respond-via-message action during incoming calls.",
    ),
    PermissionEntry::new(
        Standard,
        "TRANSMIT_IR",
        Normal,
        "",
        "Allows using the device's IR transmitter, if available.",
    ),
    PermissionEntry::new(
        Standard,
        "UNINSTALL_SHORTCUT",
        Normal,
        "",
        "Don't use this permission in your app. This permission is no longer supported.",
    ),
    PermissionEntry::new(
        Standard,
        "USE_BIOMETRIC",
        Normal,
        "",
        "Allows an app to use device supported biometric modalities.",
    ),
    PermissionEntry::new(
        Standard,
        "USE_FINGERPRINT",
        Normal,
        "allow use of fingerprint",
        "This constant was deprecated in API level 28. Applications should request USE_BIOMETRIC instead",
    ),
    PermissionEntry::new(
        Standard,
        "WRITE_CALL_LOG",
        Dangerous,
        "",
        "Allows an application to write (but not read) the user's call log data.",
    ),
    PermissionEntry::new(
        Standard,
        "WRITE_VOICEMAIL",
        Signature,
        "",
        "Allows an application to modify and remove existing voicemails in the system.",
    ),
    PermissionEntry::new(
        Standard,
        "ACCESS_BACKGROUND_LOCATION",
        Dangerous,
        "access location in background",
        "Allows an app to access location in the background. If you're requesting this permission, you must also request either",
    ),
    PermissionEntry::new(
        Standard,
        "ACCESS_MEDIA_LOCATION",
        Dangerous,
        "access any geographic locations",
        "Allows an application to access any geographic locations persisted in the user's shared collection.",
    ),
    PermissionEntry::new(
        Standard,
        "ACTIVITY_RECOGNITION",
        Dangerous,
        "allow application to recognize physical activity",
        "Allows an application to recognize physical activity.",
    ),
    PermissionEntry::new(
        Standard,
        "BIND_CALL_REDIRECTION_SERVICE",
        Signature,
        "",
        "Must be required by a CallRedirectionService, to ensure that only the system can bind to it.",
    ),
    PermissionEntry::new(
        Standard,
        "BIND_CARRIER_MESSAGING_CLIENT_SERVICE",
        Signature,
        "",
        "A subclass of CarrierMessagingClientService must be protected with this permission.",
    ),
    PermissionEntry::new(
        Standard,
        "CALL_COMPANION_APP",
        Normal,
        "",
        "Allows an app which implements the InCallService API to be eligible to be enabled as a calling companion app. This means that the Telecom framework will bind to the app's InCallService implementation when there are calls active. The app can use the InCallService API to view information about calls on the system and control these calls.",
    ),
    PermissionEntry::new(
        Standard,
        "REQUEST_PASSWORD_COMPLEXITY",
        Normal,
        "",
        "Allows an application to request the screen lock complexity and prompt users to update the screen lock to a certain complexity level.",
    ),
    PermissionEntry::new(
        Standard,
        "SMS_FINANCIAL_TRANSACTIONS",
        Signature,
        "Allows financial apps to read filtered sms messages",
        "Allows financial apps to read filtered sms messages. Protection level: signature|appop",
    ),
    PermissionEntry::new(
        Standard,
        "START_VIEW_PERMISSION_USAGE",
        Signature,
        "",
        "Allows the holder to start the permission usage screen for an app.",
    ),
    PermissionEntry::new(
        Standard,
        "USE_FULL_SCREEN_INTENT",
        Normal,
        "",
        "Required for apps targeting Build.VERSION_CODES.Q that want to use notification full screen intents.",
    ),
    PermissionEntry::new(
        Standard,
        "ACCESS_CALL_AUDIO",
        Signature,
        "Application can access call audio",
        "Allows an application assigned to the Dialer role to be granted access to the telephony call audio streams, both TX and RX.",
    ),
    PermissionEntry::new(
        Standard,
        "BIND_CONTROLS",
        Normal,
        "Allows SystemUI to request third party controls.",
        "Allows SystemUI to request third party controls. Should only be requested by the System and required by ControlsProviderService declarations.",
    ),
    PermissionEntry::new(
        Standard,
        "BIND_QUICK_ACCESS_WALLET_SERVICE",
        Signature,
        "",
        "Must be required by a QuickAccessWalletService to ensure that only the system can bind to it.",
    ),
    PermissionEntry::new(
        Standard,
        "INTERACT_ACROSS_PROFILES",
        Normal,
        "",
        "Allows interaction across profiles in the same profile group.",
    ),
    PermissionEntry::new(
        Standard,
        "LOADER_USAGE_STATS",
        Signature,
        "",
        "Allows a data loader to read a package's access logs. The access logs contain the set of pages referenced over time.",
    ),
    PermissionEntry::new(
        Standard,
        "MANAGE_EXTERNAL_STORAGE",
        Dangerous,
        "Allows an application a broad access to external storage in scoped storage",
        "Allows an application a broad access to external storage in scoped storage. Intended to be used by few apps that need to manage files on behalf of the users.",
    ),
    PermissionEntry::new(
        Standard,
        "NFC_PREFERRED_PAYMENT_INFO",
        Normal,
        "",
        "Allows applications to receive NFC preferred payment service information.",
    ),
    PermissionEntry::new(
        Standard,
        "QUERY_ALL_PACKAGES",
        Dangerous,
        "",
        "Allows query of any normal app on the device, regardless of manifest declarations.",
    ),
    PermissionEntry::new(
        Standard,
        "READ_PRECISE_PHONE_STATE",
        Normal,
        "",
        "Allows read only access to precise phone state. Allows reading of detailed information about phone state for special-use applications such as dialers, carrier applications, or ims applications.",
    ),
    PermissionEntry::new(
        Vendor,
        "HAND_TRACKING",
        Dangerous,
        "",
        "Allows an app to use hand tracking component.",
    ),
    PermissionEntry::new(
        Vendor,
        "RENDER_MODEL",
        Dangerous,
        "",
        "Allows an app to use model rendering component.",
    ),
    PermissionEntry::new(
        Vendor,
        "TRACKED_KEYBOARD",
        Dangerous,
        "",
        "Allows an app to use keyboard tracking component.",
    ),
    PermissionEntry::new(
        Vendor,
        "USE_ANCHOR_API",
        Dangerous,
        "",
        "Allows an app to use anchor.",
    ),
    PermissionEntry::new(
        Vendor,
        "FACE_TRACKING",
        Dangerous,
        "",
        "Allows an app to use face tracking component.",
    ),
    PermissionEntry::new(
        Vendor,
        "TOUCH_CONTROLLER_PRO",
        Dangerous,
        "",
        "Allows an app to use touch controller component.",
    ),
    PermissionEntry::new(
        Vendor,
        "BODY_TRACKING",
        Dangerous,
        "",
        "Allows an app to use body tracking component.",
    ),
    PermissionEntry::new(
        Vendor,
        "EYE_TRACKING",
        Dangerous,
        "",
        "Allows an app to use eye tracking component.",
    ),
    PermissionEntry::new(
        Vendor,
        "DEVICE_CONFIG_PUSH_TO_CLIENT",
        Dangerous,
        "",
        "Allows an app to send device configuration to client.",
    ),
];
